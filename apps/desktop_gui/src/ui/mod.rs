//! UI layer for the desktop shell: app frame, header bar and screen region.

pub mod app;
pub mod header;
pub mod screens;

pub use app::{DesktopShellApp, PersistedShellSettings, SETTINGS_STORAGE_KEY};
