use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use shared::domain::LocaleId;
use shell_core::{load_settings, Catalog, Settings, Shell};

#[derive(Parser, Debug)]
#[command(about = "Headless driver for the dashboard navigation shell")]
struct Args {
    /// Locale to apply before running the command.
    #[arg(long, global = true)]
    locale: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the declared route table, including disabled entries.
    Routes,
    /// Open the shell at LOCATION and print where it settles.
    Resolve { location: String },
    /// Print the header model for LOCATION.
    Header {
        #[arg(default_value = "/")]
        location: String,
    },
    /// Translate KEY in the active locale.
    Translate { key: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = load_settings();

    let output = run(&settings, args.locale.as_deref(), args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(settings: &Settings, locale: Option<&str>, command: Command) -> Result<serde_json::Value> {
    let value = match command {
        Command::Routes => serde_json::to_value(settings.route_table()?.declared())?,
        Command::Resolve { location } => {
            let shell = open_shell(settings, &location, locale)?;
            serde_json::to_value(shell.current())?
        }
        Command::Header { location } => {
            let shell = open_shell(settings, &location, locale)?;
            serde_json::to_value(shell.header())?
        }
        Command::Translate { key } => {
            let shell = open_shell(settings, &settings.initial_path, locale)?;
            json!({
                "key": key,
                "locale": shell.locales().active_locale(),
                "text": shell.translate(&key),
            })
        }
    };
    Ok(value)
}

fn open_shell(settings: &Settings, location: &str, locale: Option<&str>) -> Result<Shell> {
    let settings = Settings {
        initial_path: location.to_string(),
        ..settings.clone()
    };
    let shell = Shell::from_settings(&settings, None, Arc::new(Catalog::bundled()?))?;
    if let Some(raw) = locale {
        shell.set_locale(&LocaleId::new(raw))?;
    }
    Ok(shell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_root_reports_redirect_source() {
        let value = run(
            &Settings::default(),
            None,
            Command::Resolve {
                location: "/".into(),
            },
        )
        .expect("resolve");
        assert_eq!(value["location"], "/query");
        assert_eq!(value["redirected_from"], "/");
        assert_eq!(value["view"]["kind"], "render");
        assert_eq!(value["view"]["screen"], "query_form");
    }

    #[test]
    fn routes_include_disabled_entries() {
        let value = run(&Settings::default(), None, Command::Routes).expect("routes");
        let routes = value.as_array().expect("array");
        assert_eq!(routes.len(), 7);
        assert_eq!(
            routes.iter().filter(|route| route["enabled"] == true).count(),
            3
        );
    }

    #[test]
    fn header_in_zh_disables_zh_control() {
        let value = run(
            &Settings::default(),
            Some("zh"),
            Command::Header {
                location: "/datasources".into(),
            },
        )
        .expect("header");
        assert_eq!(value["locale_controls"][1]["label"], "ZH");
        assert_eq!(value["locale_controls"][1]["disabled"], true);
        assert_eq!(value["links"][1]["active"], true);
    }

    #[test]
    fn translate_unknown_locale_is_an_error() {
        let err = run(
            &Settings::default(),
            Some("fr"),
            Command::Translate {
                key: "intelligentQA".into(),
            },
        )
        .expect_err("fr");
        assert!(err.to_string().contains("'fr' is not available"));
    }
}
