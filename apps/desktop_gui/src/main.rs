use std::{path::PathBuf, sync::Arc};

mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use shell_core::{config::load_settings_from, Catalog, Shell};

use crate::ui::{DesktopShellApp, PersistedShellSettings, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(about = "Dashboard navigation shell")]
struct Args {
    /// Config file; defaults to ./shell.toml or $SHELL_CONFIG.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Location to open instead of the configured one.
    #[arg(long)]
    path: Option<String>,
    /// Locale to start in; overrides the persisted preference.
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let config_path = args
        .config
        .or_else(|| std::env::var("SHELL_CONFIG").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(shell_core::config::DEFAULT_CONFIG_FILE));
    let mut settings = load_settings_from(Some(&config_path), |name| std::env::var(name).ok());
    if let Some(path) = args.path {
        settings.initial_path = path;
    }

    let catalog = Arc::new(Catalog::bundled().context("failed to load bundled translations")?);
    // Validate the route table before a window exists.
    settings.route_table()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Smart ERP AI Assistant")
            .with_inner_size([1200.0, 780.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Smart ERP AI Assistant",
        options,
        Box::new(move |cc| {
            let persisted = PersistedShellSettings::from_storage(
                cc.storage
                    .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY)),
            );
            let preferred = args.locale.or(persisted.locale);
            let shell = Shell::from_settings(&settings, preferred.as_deref(), catalog)?;
            tracing::info!(
                location = %shell.current().location,
                locale = %shell.locales().active_locale(),
                "shell started"
            );
            Ok(Box::new(DesktopShellApp::new(shell)))
        }),
    )
    .map_err(|err| anyhow!("desktop shell exited with error: {err}"))
}
