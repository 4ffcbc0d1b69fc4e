//! Translation resources consumed by the locale controller.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use shared::domain::LocaleId;

const EN_RESOURCES: &str = include_str!("../resources/en.json");
const ZH_RESOURCES: &str = include_str!("../resources/zh.json");

/// Lookup from `(key, locale)` to a localized string.
///
/// Implementations only answer the question; fallback policy belongs to the
/// caller.
pub trait TranslationSource: Send + Sync {
    fn lookup(&self, key: &str, locale: &LocaleId) -> Option<&str>;

    /// Locales this source has at least one string for.
    fn locales(&self) -> Vec<LocaleId>;
}

/// In-memory string tables keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<LocaleId, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `en` and `zh` bundles shipped with the shell.
    pub fn bundled() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.insert_json(LocaleId::new("en"), EN_RESOURCES)?;
        catalog.insert_json(LocaleId::new("zh"), ZH_RESOURCES)?;
        Ok(catalog)
    }

    /// Adds (or overlays) a flat `{"key": "text"}` JSON bundle.
    pub fn insert_json(&mut self, locale: LocaleId, raw: &str) -> Result<()> {
        let strings: HashMap<String, String> = serde_json::from_str(raw)
            .with_context(|| format!("failed to parse '{locale}' translation bundle"))?;
        self.insert_table(locale, strings);
        Ok(())
    }

    pub fn insert_table(
        &mut self,
        locale: LocaleId,
        strings: impl IntoIterator<Item = (String, String)>,
    ) {
        self.tables.entry(locale).or_default().extend(strings);
    }

    pub fn with_entries<'a>(
        mut self,
        locale: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.insert_table(
            LocaleId::new(locale),
            entries
                .into_iter()
                .map(|(key, text)| (key.to_string(), text.to_string())),
        );
        self
    }

    pub fn len(&self, locale: &LocaleId) -> usize {
        self.tables.get(locale).map(HashMap::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

impl TranslationSource for Catalog {
    fn lookup(&self, key: &str, locale: &LocaleId) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    fn locales(&self) -> Vec<LocaleId> {
        self.tables
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_has_header_strings_for_both_locales() {
        let catalog = Catalog::bundled().expect("bundled");
        let en = LocaleId::new("en");
        let zh = LocaleId::new("zh");
        assert_eq!(
            catalog.lookup("smartERPAIAssistant", &en),
            Some("Smart ERP AI Assistant")
        );
        assert_eq!(catalog.lookup("intelligentQA", &zh), Some("智能问答"));
        assert_eq!(catalog.locales(), vec![en, zh]);
    }

    #[test]
    fn bundled_locales_share_the_same_keys() {
        let catalog = Catalog::bundled().expect("bundled");
        let en = &catalog.tables[&LocaleId::new("en")];
        let zh = &catalog.tables[&LocaleId::new("zh")];
        let mut en_keys: Vec<&String> = en.keys().collect();
        let mut zh_keys: Vec<&String> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn overlay_replaces_existing_keys() {
        let mut catalog = Catalog::new().with_entries("en", [("title", "Old")]);
        catalog
            .insert_json(LocaleId::new("en"), r#"{"title": "New"}"#)
            .expect("insert");
        assert_eq!(catalog.lookup("title", &LocaleId::new("en")), Some("New"));
        assert_eq!(catalog.len(&LocaleId::new("en")), 1);
    }

    #[test]
    fn malformed_bundle_is_reported() {
        let err = Catalog::new()
            .insert_json(LocaleId::new("en"), "[1, 2]")
            .expect_err("not a map");
        assert!(err.to_string().contains("'en' translation bundle"));
    }

    #[test]
    fn unknown_locale_has_no_strings() {
        let catalog = Catalog::bundled().expect("bundled");
        assert_eq!(catalog.lookup("intelligentQA", &LocaleId::new("fr")), None);
        assert_eq!(catalog.len(&LocaleId::new("fr")), 0);
    }
}
