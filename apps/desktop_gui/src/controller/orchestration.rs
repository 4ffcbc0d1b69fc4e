//! Command queue between widgets and the shell.
//!
//! Widgets only enqueue; the app drains the queue at the top of each frame so
//! every paint reads state after the latest completed command.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use shell_core::{CommandOutcome, Shell};

use crate::controller::events::{status_for_error, UiCommand};

pub fn dispatch_ui_command(cmd_tx: &Sender<UiCommand>, cmd: UiCommand, status: &mut String) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI command queue disconnected; restart the application".to_string();
        }
    }
}

/// Applies every queued command. Returns how many were applied.
pub fn drain_ui_commands(shell: &mut Shell, cmd_rx: &Receiver<UiCommand>, status: &mut String) -> usize {
    let mut applied = 0;
    while let Ok(cmd) = cmd_rx.try_recv() {
        applied += 1;
        match cmd {
            UiCommand::Header(command) => match shell.apply(command) {
                Ok(CommandOutcome::Navigated(nav)) => {
                    status.clear();
                    tracing::debug!(location = %nav.location, view = ?nav.view, "navigated");
                }
                Ok(CommandOutcome::Locale(change)) => {
                    tracing::debug!(?change, "locale command applied");
                }
                Err(err) => {
                    tracing::debug!(%err, "ui command rejected");
                    if let Some(text) = status_for_error(&err) {
                        *status = text;
                    }
                }
            },
            UiCommand::Back => {
                if shell.back().is_some() {
                    status.clear();
                }
            }
            UiCommand::Forward => {
                if shell.forward().is_some() {
                    status.clear();
                }
            }
        }
    }
    applied
}
