//! Controller layer: UI commands and their application to the shell.

pub mod events;
pub mod orchestration;
