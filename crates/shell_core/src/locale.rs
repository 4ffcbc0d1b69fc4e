//! Active display locale and its change broadcast.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use shared::{domain::LocaleId, error::ShellError};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::i18n::TranslationSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleChange {
    Switched { from: LocaleId, to: LocaleId },
    /// The requested locale was already active; nobody was notified.
    Unchanged,
}

/// Owns the single active locale.
///
/// The locale only changes through [`LocaleController::set_locale`]. Every
/// change is published on a watch channel so text-bearing views know to
/// re-render; redundant switches publish nothing.
pub struct LocaleController {
    available: Vec<LocaleId>,
    active: watch::Sender<LocaleId>,
    source: Arc<dyn TranslationSource>,
    warned_missing: Mutex<HashSet<(LocaleId, String)>>,
}

impl LocaleController {
    pub fn new(
        available: Vec<LocaleId>,
        initial: LocaleId,
        source: Arc<dyn TranslationSource>,
    ) -> Result<Self, ShellError> {
        let mut deduped: Vec<LocaleId> = Vec::with_capacity(available.len());
        for locale in available {
            if !deduped.contains(&locale) {
                deduped.push(locale);
            }
        }
        let Some(first) = deduped.first().cloned() else {
            return Err(ShellError::EmptyLocaleSet);
        };

        let initial = if deduped.contains(&initial) {
            initial
        } else {
            warn!(requested = %initial, fallback = %first, "initial locale not available");
            first
        };

        for locale in &deduped {
            if !source.locales().contains(locale) {
                warn!(%locale, "no translations loaded for available locale");
            }
        }

        let (active, _) = watch::channel(initial);
        Ok(Self {
            available: deduped,
            active,
            source,
            warned_missing: Mutex::new(HashSet::new()),
        })
    }

    pub fn active_locale(&self) -> LocaleId {
        self.active.borrow().clone()
    }

    pub fn is_active(&self, locale: &LocaleId) -> bool {
        *self.active.borrow() == *locale
    }

    pub fn available_locales(&self) -> &[LocaleId] {
        &self.available
    }

    pub fn is_available(&self, locale: &LocaleId) -> bool {
        self.available.contains(locale)
    }

    pub fn set_locale(&self, locale: &LocaleId) -> Result<LocaleChange, ShellError> {
        if !self.is_available(locale) {
            warn!(requested = %locale, "rejected locale switch");
            return Err(ShellError::InvalidLocale {
                requested: locale.clone(),
                available: self.available.clone(),
            });
        }

        let mut previous = None;
        self.active.send_if_modified(|current| {
            if current == locale {
                return false;
            }
            previous = Some(std::mem::replace(current, locale.clone()));
            true
        });

        match previous {
            Some(from) => {
                info!(%from, to = %locale, "locale switched");
                Ok(LocaleChange::Switched {
                    from,
                    to: locale.clone(),
                })
            }
            None => Ok(LocaleChange::Unchanged),
        }
    }

    pub fn subscribe(&self) -> LocaleSubscription {
        LocaleSubscription {
            rx: self.active.subscribe(),
        }
    }

    /// Localized string for `key` in the active locale, or `key` itself when
    /// the active locale has no entry.
    pub fn translate(&self, key: &str) -> String {
        let locale = self.active_locale();
        match self.source.lookup(key, &locale) {
            Some(text) => text.to_string(),
            None => {
                self.warn_missing(key, &locale);
                key.to_string()
            }
        }
    }

    pub fn translate_or_err(&self, key: &str) -> Result<String, ShellError> {
        let locale = self.active_locale();
        self.source
            .lookup(key, &locale)
            .map(str::to_string)
            .ok_or_else(|| ShellError::MissingTranslation {
                key: key.to_string(),
                locale,
            })
    }

    fn warn_missing(&self, key: &str, locale: &LocaleId) {
        let Ok(mut warned) = self.warned_missing.lock() else {
            return;
        };
        if warned.insert((locale.clone(), key.to_string())) {
            warn!(%key, %locale, "missing translation, showing key");
        }
    }
}

/// Handle a view keeps to learn about locale changes.
pub struct LocaleSubscription {
    rx: watch::Receiver<LocaleId>,
}

impl LocaleSubscription {
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Returns the new locale once per change, `None` otherwise.
    pub fn changed(&mut self) -> Option<LocaleId> {
        if !self.has_changed() {
            return None;
        }
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn current(&self) -> LocaleId {
        self.rx.borrow().clone()
    }
}

#[cfg(test)]
#[path = "tests/locale_tests.rs"]
mod tests;
