use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::{domain::LocaleId, error::ShellError};
use tracing::warn;

use crate::routing::{default_routes, RouteEntry, RouteTable, ROOT_PATH};

pub const DEFAULT_CONFIG_FILE: &str = "shell.toml";
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicitly configured locale; wins over the system locale.
    pub default_locale: Option<LocaleId>,
    /// Locale detected from `LC_ALL` / `LC_MESSAGES` / `LANG`.
    pub system_locale: Option<LocaleId>,
    pub available_locales: Vec<LocaleId>,
    pub initial_path: String,
    pub enable_routes: Vec<String>,
    pub disable_routes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: None,
            system_locale: None,
            available_locales: vec![LocaleId::new("en"), LocaleId::new("zh")],
            initial_path: ROOT_PATH.into(),
            enable_routes: Vec::new(),
            disable_routes: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    default_locale: Option<String>,
    available_locales: Option<Vec<String>>,
    initial_path: Option<String>,
    enable_routes: Option<Vec<String>>,
    disable_routes: Option<Vec<String>>,
}

/// Defaults, then `shell.toml` (or `$SHELL_CONFIG`), then environment.
pub fn load_settings() -> Settings {
    let path = std::env::var("SHELL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_settings_from(Some(&path), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = config_path {
        if let Ok(raw) = fs::read_to_string(path) {
            match toml::from_str::<FileSettings>(&raw) {
                Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
                Err(error) => warn!(
                    path = %path.display(),
                    %error,
                    "ignoring unreadable shell config"
                ),
            }
        }
    }

    if let Some(v) = env("SHELL_LOCALE").and_then(|v| LocaleId::parse(&v)) {
        settings.default_locale = Some(v);
    }
    if let Some(v) = env("APP__DEFAULT_LOCALE").and_then(|v| LocaleId::parse(&v)) {
        settings.default_locale = Some(v);
    }

    if let Some(v) = env("APP__AVAILABLE_LOCALES") {
        let locales = parse_locale_list(v.split(','));
        if locales.is_empty() {
            warn!(value = %v, "APP__AVAILABLE_LOCALES has no usable locale");
        } else {
            settings.available_locales = locales;
        }
    }

    if let Some(v) = env("APP__INITIAL_PATH") {
        settings.initial_path = v;
    }
    if let Some(v) = env("APP__ENABLE_ROUTES") {
        settings.enable_routes = split_list(&v);
    }
    if let Some(v) = env("APP__DISABLE_ROUTES") {
        settings.disable_routes = split_list(&v);
    }

    settings.system_locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| env(name))
        .find_map(|v| LocaleId::parse(&v));

    settings
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.default_locale.and_then(|v| LocaleId::parse(&v)) {
        settings.default_locale = Some(v);
    }
    if let Some(v) = file_cfg.available_locales {
        let locales = parse_locale_list(v.iter().map(String::as_str));
        if !locales.is_empty() {
            settings.available_locales = locales;
        }
    }
    if let Some(v) = file_cfg.initial_path {
        settings.initial_path = v;
    }
    if let Some(v) = file_cfg.enable_routes {
        settings.enable_routes = v;
    }
    if let Some(v) = file_cfg.disable_routes {
        settings.disable_routes = v;
    }
}

fn parse_locale_list<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<LocaleId> {
    raw.filter_map(LocaleId::parse).collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl Settings {
    /// First usable of: persisted preference, configured default, system
    /// locale, `en`, first available.
    pub fn initial_locale(&self, persisted: Option<&str>) -> LocaleId {
        let persisted = persisted.and_then(LocaleId::parse);
        [
            persisted,
            self.default_locale.clone(),
            self.system_locale.clone(),
            Some(LocaleId::new(FALLBACK_LOCALE)),
        ]
        .into_iter()
        .flatten()
        .find(|locale| self.available_locales.contains(locale))
        .or_else(|| self.available_locales.first().cloned())
        .unwrap_or_else(|| LocaleId::new(FALLBACK_LOCALE))
    }

    pub fn route_table(&self) -> Result<RouteTable, ShellError> {
        let routes = apply_route_toggles(default_routes(), &self.enable_routes, &self.disable_routes)?;
        RouteTable::new(routes)
    }
}

/// `disable` switches off entries declared enabled at a path; `enable`
/// switches on entries declared disabled at a path. Naming a path that has no
/// such entry is a configuration error.
pub fn apply_route_toggles(
    mut routes: Vec<RouteEntry>,
    enable: &[String],
    disable: &[String],
) -> Result<Vec<RouteEntry>, ShellError> {
    let declared: Vec<bool> = routes.iter().map(|entry| entry.enabled).collect();

    for (toggles, from_state, to_state) in [(disable, true, false), (enable, false, true)] {
        for path in toggles {
            let mut touched = false;
            for (entry, declared_enabled) in routes.iter_mut().zip(&declared) {
                if entry.path == *path && *declared_enabled == from_state {
                    entry.enabled = to_state;
                    touched = true;
                }
            }
            if !touched {
                let verb = if to_state { "enable" } else { "disable" };
                return Err(ShellError::InvalidConfig(format!(
                    "cannot {verb} route '{path}': no matching declared route"
                )));
            }
        }
    }

    Ok(routes)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
