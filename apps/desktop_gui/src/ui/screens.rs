//! Screen region: mounts the screen the navigator settled on.

use std::collections::HashMap;

use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::ScreenId;
use shell_core::{HeaderCommand, LocaleController, Navigation, ResolvedView};

use crate::controller::{events::UiCommand, orchestration::dispatch_ui_command};

/// A screen mounted in the central region.
pub trait Screen {
    fn show(&mut self, ui: &mut egui::Ui, locales: &LocaleController);
}

pub fn title_key(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Dashboard => "dashboard",
        ScreenId::QueryForm => "intelligentQA",
        ScreenId::InventoryCheck => "inventoryCheck",
        ScreenId::ChartDisplay => "chartDisplay",
        ScreenId::ReportGenerator => "reportGenerator",
        ScreenId::DataSourceManager => "dataSourceManagement",
    }
}

/// Stand-in for screens whose content lives elsewhere.
pub struct PlaceholderScreen {
    screen: ScreenId,
}

impl PlaceholderScreen {
    pub fn new(screen: ScreenId) -> Self {
        Self { screen }
    }
}

impl Screen for PlaceholderScreen {
    fn show(&mut self, ui: &mut egui::Ui, locales: &LocaleController) {
        ui.heading(locales.translate(title_key(self.screen)));
        ui.separator();
        ui.weak(self.screen.as_str());
    }
}

pub struct ScreenRegistry {
    screens: HashMap<ScreenId, Box<dyn Screen>>,
}

impl ScreenRegistry {
    pub fn with_placeholders() -> Self {
        let screens = [
            ScreenId::Dashboard,
            ScreenId::QueryForm,
            ScreenId::InventoryCheck,
            ScreenId::ChartDisplay,
            ScreenId::ReportGenerator,
            ScreenId::DataSourceManager,
        ]
        .into_iter()
        .map(|screen| (screen, Box::new(PlaceholderScreen::new(screen)) as Box<dyn Screen>))
        .collect();
        Self { screens }
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.screens.contains_key(&screen)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        navigation: &Navigation,
        locales: &LocaleController,
        cmd_tx: &Sender<UiCommand>,
        status: &mut String,
    ) {
        match &navigation.view {
            ResolvedView::Render { screen } => match self.screens.get_mut(screen) {
                Some(view) => view.show(ui, locales),
                None => {
                    tracing::warn!(%screen, "no view registered for screen");
                    show_not_found(ui, &navigation.path, locales, cmd_tx, status);
                }
            },
            ResolvedView::NotFound { path } => {
                show_not_found(ui, path, locales, cmd_tx, status);
            }
            ResolvedView::Redirect { to } => {
                // The navigator settles redirects before anything is mounted.
                tracing::warn!(%to, "unsettled redirect reached the screen region");
            }
        }
    }
}

fn show_not_found(
    ui: &mut egui::Ui,
    path: &str,
    locales: &LocaleController,
    cmd_tx: &Sender<UiCommand>,
    status: &mut String,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(locales.translate("pageNotFound"));
        ui.monospace(path);
        ui.label(locales.translate("pageNotFoundHint"));
        ui.add_space(12.0);
        if ui.link(locales.translate("backToQuery")).clicked() {
            dispatch_ui_command(
                cmd_tx,
                UiCommand::Header(HeaderCommand::Navigate("/query".to_string())),
                status,
            );
        }
    });
}
