use std::fmt;

use serde::{Deserialize, Serialize};

/// Screen components the shell knows how to mount.
///
/// The screens themselves live outside the shell; this is only the handle the
/// route table stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Dashboard,
    QueryForm,
    InventoryCheck,
    ChartDisplay,
    ReportGenerator,
    DataSourceManager,
}

impl ScreenId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::QueryForm => "QueryForm",
            Self::InventoryCheck => "InventoryCheck",
            Self::ChartDisplay => "ChartDisplay",
            Self::ReportGenerator => "ReportGenerator",
            Self::DataSourceManager => "DataSourceManager",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language tag selecting a variant of user-facing strings (`en`, `zh`, ...).
///
/// Always stored lowercase and without region or encoding suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_locale_tag(raw.as_ref()))
    }

    /// Lenient parse used for environment and persisted values.
    ///
    /// `"zh_CN.UTF-8"`, `"ZH-cn"` and `"zh"` all become `zh`. Returns `None`
    /// for empty input and for `C`/`POSIX` style system locales.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = normalize_locale_tag(raw);
        if tag.is_empty() || tag == "c" || tag == "posix" {
            return None;
        }
        if !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label shown on the header control, e.g. `EN`.
    pub fn label(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<LocaleId> for String {
    fn from(value: LocaleId) -> Self {
        value.0
    }
}

fn normalize_locale_tag(raw: &str) -> String {
    raw.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
