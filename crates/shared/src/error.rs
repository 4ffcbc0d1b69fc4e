use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::LocaleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    RouteNotFound,
    InvalidLocale,
    MissingTranslation,
    InvalidRouteTable,
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("no live route matches path '{path}'")]
    RouteNotFound { path: String },
    #[error("locale '{requested}' is not available (available: {})", join_locales(.available))]
    InvalidLocale {
        requested: LocaleId,
        available: Vec<LocaleId>,
    },
    #[error("no '{locale}' translation for key '{key}'")]
    MissingTranslation { key: String, locale: LocaleId },
    #[error("more than one enabled route is declared for path '{path}'")]
    DuplicateRoute { path: String },
    #[error("route path '{path}' is invalid: {reason}")]
    InvalidRoutePath { path: String, reason: &'static str },
    #[error("route '{from}' redirects to '{to}' which has no enabled route")]
    DanglingRedirect { from: String, to: String },
    #[error("redirect chain starting at '{path}' never reaches a screen")]
    RedirectLoop { path: String },
    #[error("root path '/' does not resolve to a reachable screen")]
    UnreachableRoot,
    #[error("locale set is empty")]
    EmptyLocaleSet,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ShellError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RouteNotFound { .. } => ErrorCode::RouteNotFound,
            Self::InvalidLocale { .. } => ErrorCode::InvalidLocale,
            Self::MissingTranslation { .. } => ErrorCode::MissingTranslation,
            Self::DuplicateRoute { .. }
            | Self::InvalidRoutePath { .. }
            | Self::DanglingRedirect { .. }
            | Self::RedirectLoop { .. }
            | Self::UnreachableRoot => ErrorCode::InvalidRouteTable,
            Self::EmptyLocaleSet | Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Runtime conditions the shell recovers from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::RouteNotFound | ErrorCode::InvalidLocale | ErrorCode::MissingTranslation
        )
    }
}

fn join_locales(locales: &[LocaleId]) -> String {
    locales
        .iter()
        .map(LocaleId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
