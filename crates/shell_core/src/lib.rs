//! Navigation shell core: route table, history, active locale and the header
//! view model built from them.

use std::sync::Arc;

use shared::{domain::LocaleId, error::ShellError};
use tracing::debug;

pub mod config;
pub mod header;
pub mod history;
pub mod i18n;
pub mod locale;
pub mod routing;

pub use config::{load_settings, Settings};
pub use header::{HeaderCommand, HeaderModel, LocaleControl, NavLink};
pub use history::{History, Navigation, Navigator};
pub use i18n::{Catalog, TranslationSource};
pub use locale::{LocaleChange, LocaleController, LocaleSubscription};
pub use routing::{default_routes, ResolvedView, RouteEntry, RouteTable, RouteTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Navigated(Navigation),
    Locale(LocaleChange),
}

/// Explicit context for the shell: the navigator and the locale controller.
///
/// Views receive `&Shell` (or one of its parts); nothing reads the locale or
/// the location from a global.
pub struct Shell {
    navigator: Navigator,
    locales: LocaleController,
}

impl Shell {
    pub fn new(navigator: Navigator, locales: LocaleController) -> Self {
        Self { navigator, locales }
    }

    pub fn from_settings(
        settings: &Settings,
        persisted_locale: Option<&str>,
        source: Arc<dyn TranslationSource>,
    ) -> Result<Self, ShellError> {
        let table = settings.route_table()?;
        let locales = LocaleController::new(
            settings.available_locales.clone(),
            settings.initial_locale(persisted_locale),
            source,
        )?;
        let navigator = Navigator::start(table, &settings.initial_path);
        Ok(Self::new(navigator, locales))
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn locales(&self) -> &LocaleController {
        &self.locales
    }

    pub fn current(&self) -> &Navigation {
        self.navigator.current()
    }

    pub fn header(&self) -> HeaderModel {
        HeaderModel::build(&self.navigator, &self.locales)
    }

    pub fn navigate(&mut self, location: &str) -> &Navigation {
        self.navigator.navigate(location)
    }

    pub fn back(&mut self) -> Option<&Navigation> {
        self.navigator.back()
    }

    pub fn forward(&mut self) -> Option<&Navigation> {
        self.navigator.forward()
    }

    pub fn set_locale(&self, locale: &LocaleId) -> Result<LocaleChange, ShellError> {
        self.locales.set_locale(locale)
    }

    pub fn translate(&self, key: &str) -> String {
        self.locales.translate(key)
    }

    pub fn apply(&mut self, command: HeaderCommand) -> Result<CommandOutcome, ShellError> {
        debug!(?command, "header command");
        match command {
            HeaderCommand::Navigate(location) => Ok(CommandOutcome::Navigated(
                self.navigator.navigate(&location).clone(),
            )),
            HeaderCommand::SwitchLocale(locale) => {
                self.locales.set_locale(&locale).map(CommandOutcome::Locale)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
