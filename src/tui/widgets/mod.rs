//! Leaf widgets drawn by the panel and host components.

pub mod command_list;
pub mod hidden_commands;
pub mod host_chrome;
pub mod tab_strip;
pub mod toggle_list;

pub use command_list::CommandListWidget;
pub use hidden_commands::HiddenCommandsWidget;
pub use host_chrome::{BackControlWidget, CreditsWidget, NoticeLineWidget, TitleHeaderWidget};
pub use tab_strip::{TabListWidget, TabStripWidget};
pub use toggle_list::{ToggleListWidget, ToggleRow};
