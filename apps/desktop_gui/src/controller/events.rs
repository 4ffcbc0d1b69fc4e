//! UI commands and how shell failures surface in the status line.

use shared::error::{ErrorCode, ShellError};
use shell_core::HeaderCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Header(HeaderCommand),
    Back,
    Forward,
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Header(HeaderCommand::Navigate(_)) => "navigate",
            Self::Header(HeaderCommand::SwitchLocale(_)) => "switch_locale",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Navigation,
    Locale,
    Translation,
    Startup,
}

pub fn categorize(err: &ShellError) -> UiErrorCategory {
    match err.code() {
        ErrorCode::RouteNotFound => UiErrorCategory::Navigation,
        ErrorCode::InvalidLocale => UiErrorCategory::Locale,
        ErrorCode::MissingTranslation => UiErrorCategory::Translation,
        ErrorCode::InvalidRouteTable | ErrorCode::InvalidConfig => UiErrorCategory::Startup,
    }
}

/// Status-line text for a failed command, if the user should see one.
///
/// Locale and translation failures stay silent: the only callers are the
/// fixed header controls, which already render the rejected choice as a
/// no-op.
pub fn status_for_error(err: &ShellError) -> Option<String> {
    match categorize(err) {
        UiErrorCategory::Locale | UiErrorCategory::Translation => None,
        UiErrorCategory::Navigation => Some(err.to_string()),
        UiErrorCategory::Startup => Some(format!("Shell configuration error: {err}")),
    }
}
