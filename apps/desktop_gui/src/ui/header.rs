//! Persistent top navigation bar.

use crossbeam_channel::Sender;
use eframe::egui;
use shell_core::{routing::NavIcon, HeaderCommand, HeaderModel};

use crate::controller::{events::UiCommand, orchestration::dispatch_ui_command};

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(13, 110, 253);
const HEADER_TEXT: egui::Color32 = egui::Color32::WHITE;
const HEADER_TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(200, 220, 255);

fn icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Brain => "💡",
        NavIcon::Database => "🗄",
        NavIcon::Boxes => "📦",
        NavIcon::Chart => "📈",
        NavIcon::Report => "📄",
        NavIcon::Home => "🏠",
    }
}

pub struct HistoryButtons {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

pub fn show_header(
    ctx: &egui::Context,
    header: &HeaderModel,
    history: HistoryButtons,
    cmd_tx: &Sender<UiCommand>,
    status: &mut String,
) {
    egui::TopBottomPanel::top("shell_header")
        .resizable(false)
        .exact_height(44.0)
        .frame(
            egui::Frame::new()
                .fill(HEADER_FILL)
                .inner_margin(egui::Margin::symmetric(12, 6)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if ui
                    .add_enabled(history.can_go_back, egui::Button::new("◀").frame(false))
                    .clicked()
                {
                    dispatch_ui_command(cmd_tx, UiCommand::Back, status);
                }
                if ui
                    .add_enabled(history.can_go_forward, egui::Button::new("▶").frame(false))
                    .clicked()
                {
                    dispatch_ui_command(cmd_tx, UiCommand::Forward, status);
                }

                let brand = egui::RichText::new(format!(
                    "{} {}",
                    icon_glyph(header.brand.icon),
                    header.brand.label
                ))
                .strong()
                .size(17.0)
                .color(HEADER_TEXT);
                if ui.add(egui::Button::new(brand).frame(false)).clicked() {
                    navigate(cmd_tx, &header.brand.to, status);
                }

                ui.add_space(16.0);

                for link in &header.links {
                    let color = if link.active {
                        HEADER_TEXT
                    } else {
                        HEADER_TEXT_MUTED
                    };
                    let text = egui::RichText::new(format!("{} {}", icon_glyph(link.icon), link.label))
                        .color(color);
                    if ui.selectable_label(link.active, text).clicked() {
                        navigate(cmd_tx, &link.to, status);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for control in header.locale_controls.iter().rev() {
                        let color = if control.disabled {
                            HEADER_TEXT_MUTED
                        } else {
                            HEADER_TEXT
                        };
                        let button =
                            egui::Button::new(egui::RichText::new(&control.label).color(color))
                                .frame(false);
                        if ui.add_enabled(!control.disabled, button).clicked() {
                            dispatch_ui_command(
                                cmd_tx,
                                UiCommand::Header(HeaderCommand::SwitchLocale(
                                    control.locale.clone(),
                                )),
                                status,
                            );
                        }
                    }
                });
            });
        });
}

fn navigate(cmd_tx: &Sender<UiCommand>, to: &str, status: &mut String) {
    dispatch_ui_command(
        cmd_tx,
        UiCommand::Header(HeaderCommand::Navigate(to.to_string())),
        status,
    );
}
