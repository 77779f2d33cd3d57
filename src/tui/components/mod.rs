pub mod app;
pub mod settings_view;

pub use app::{App, AppProps};
pub use settings_view::{ContentProps, SettingsView, SettingsViewProps};
