pub mod commands;
pub mod config;
pub mod formatting;
pub mod l10n;
pub mod logging;
pub mod manager;
pub mod panel;
pub mod settings;
pub mod tui;
