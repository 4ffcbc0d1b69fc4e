use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shell_core::{header::BRAND_LABEL_KEY, LocaleSubscription, Shell};

use crate::controller::{
    events::UiCommand,
    orchestration::{dispatch_ui_command, drain_ui_commands},
};
use crate::ui::{
    header::{show_header, HistoryButtons},
    screens::ScreenRegistry,
};

pub const SETTINGS_STORAGE_KEY: &str = "dashboard_shell_settings";
const UI_COMMAND_QUEUE_CAPACITY: usize = 64;

/// What survives a restart: only the chosen locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedShellSettings {
    #[serde(default)]
    pub locale: Option<String>,
}

impl PersistedShellSettings {
    pub fn from_storage(raw: Option<String>) -> Self {
        raw.and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }
}

pub struct DesktopShellApp {
    shell: Shell,
    screens: ScreenRegistry,
    cmd_tx: Sender<UiCommand>,
    cmd_rx: Receiver<UiCommand>,
    locale_events: LocaleSubscription,
    title_synced: bool,
    status: String,
}

impl DesktopShellApp {
    pub fn new(shell: Shell) -> Self {
        let (cmd_tx, cmd_rx) = bounded::<UiCommand>(UI_COMMAND_QUEUE_CAPACITY);
        let locale_events = shell.locales().subscribe();
        Self {
            shell,
            screens: ScreenRegistry::with_placeholders(),
            cmd_tx,
            cmd_rx,
            locale_events,
            title_synced: false,
            status: String::new(),
        }
    }

    fn window_title(&self) -> String {
        self.shell.translate(BRAND_LABEL_KEY)
    }

    fn handle_history_shortcuts(&mut self, ctx: &egui::Context) {
        let (back, forward) = ctx.input(|input| {
            (
                input.modifiers.alt && input.key_pressed(egui::Key::ArrowLeft),
                input.modifiers.alt && input.key_pressed(egui::Key::ArrowRight),
            )
        });
        if back {
            dispatch_ui_command(&self.cmd_tx, UiCommand::Back, &mut self.status);
        }
        if forward {
            dispatch_ui_command(&self.cmd_tx, UiCommand::Forward, &mut self.status);
        }
    }
}

impl eframe::App for DesktopShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_history_shortcuts(ctx);
        drain_ui_commands(&mut self.shell, &self.cmd_rx, &mut self.status);

        if self.locale_events.changed().is_some() || !self.title_synced {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
            self.title_synced = true;
        }

        let header = self.shell.header();
        let history = self.shell.navigator().history();
        show_header(
            ctx,
            &header,
            HistoryButtons {
                can_go_back: history.can_go_back(),
                can_go_forward: history.can_go_forward(),
            },
            &self.cmd_tx,
            &mut self.status,
        );

        if !self.status.is_empty() {
            egui::TopBottomPanel::bottom("shell_status")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new(&self.status).small());
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.screens.show(
                ui,
                self.shell.current(),
                self.shell.locales(),
                &self.cmd_tx,
                &mut self.status,
            );
        });

        // Commands queued this frame need one more pass to show up.
        if !self.cmd_rx.is_empty() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedShellSettings {
            locale: Some(self.shell.locales().active_locale().to_string()),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
