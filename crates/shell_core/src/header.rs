//! View model for the persistent top navigation bar.

use serde::Serialize;
use shared::domain::LocaleId;

use crate::{
    history::Navigator,
    locale::LocaleController,
    routing::{NavIcon, RouteTarget},
};

pub const BRAND_LABEL_KEY: &str = "smartERPAIAssistant";
pub const BRAND_TARGET: &str = "/query";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub to: String,
    pub label: String,
    pub icon: NavIcon,
    pub active: bool,
}

/// A locale switch. The control for the active locale stays visible but
/// disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleControl {
    pub locale: LocaleId,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    pub brand: NavLink,
    pub links: Vec<NavLink>,
    pub locale_controls: Vec<LocaleControl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderCommand {
    Navigate(String),
    SwitchLocale(LocaleId),
}

impl HeaderModel {
    pub fn build(navigator: &Navigator, locales: &LocaleController) -> Self {
        let brand = NavLink {
            to: BRAND_TARGET.to_string(),
            label: locales.translate(BRAND_LABEL_KEY),
            icon: NavIcon::Brain,
            active: navigator.is_active(BRAND_TARGET),
        };

        let links = navigator
            .table()
            .live_entries()
            .filter(|entry| matches!(entry.target, RouteTarget::Render { .. }))
            .filter_map(|entry| {
                let nav = entry.nav.as_ref()?;
                Some(NavLink {
                    to: entry.path.clone(),
                    label: locales.translate(nav.label_key),
                    icon: nav.icon,
                    active: navigator.is_active(&entry.path),
                })
            })
            .collect();

        let locale_controls = locales
            .available_locales()
            .iter()
            .map(|locale| LocaleControl {
                locale: locale.clone(),
                label: locale.label(),
                disabled: locales.is_active(locale),
            })
            .collect();

        Self {
            brand,
            links,
            locale_controls,
        }
    }

    pub fn locale_control(&self, locale: &LocaleId) -> Option<&LocaleControl> {
        self.locale_controls
            .iter()
            .find(|control| control.locale == *locale)
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
