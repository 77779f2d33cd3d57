//! Persisted plugin options shown on the General tab.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::config::{self, Config, ConfigError};
use crate::l10n::t;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub confirm_deletion: bool,
    pub show_add_command: bool,
    pub debug: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            confirm_deletion: true,
            show_add_command: true,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ConfirmDeletion,
    ShowAddCommand,
    Debug,
}

impl SettingKey {
    /// Display order on the General tab
    pub const ALL: [SettingKey; 3] = [
        SettingKey::ConfirmDeletion,
        SettingKey::ShowAddCommand,
        SettingKey::Debug,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::ConfirmDeletion => t("Always ask before removing?"),
            SettingKey::ShowAddCommand => t("Show \"Add Command\" Button"),
            SettingKey::Debug => t("Enable debugging"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingKey::ConfirmDeletion => {
                t("Always show a Popup to confirm deletion of a Command.")
            }
            SettingKey::ShowAddCommand => {
                t("Show the \"Add Command\" Button in every Menu. Requires restart.")
            }
            SettingKey::Debug => t("Enable console output."),
        }
    }
}

impl PluginSettings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::ConfirmDeletion => self.confirm_deletion,
            SettingKey::ShowAddCommand => self.show_add_command,
            SettingKey::Debug => self.debug,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::ConfirmDeletion => self.confirm_deletion = value,
            SettingKey::ShowAddCommand => self.show_add_command = value,
            SettingKey::Debug => self.debug = value,
        }
    }
}

/// Host-visible consequences of flipping one toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleChange {
    pub key: SettingKey,
    pub value: bool,
    /// Notice to show the user
    pub notice: Option<&'static str>,
    /// The host's "add command" buttons must go away
    pub remove_add_buttons: bool,
    /// New debug state, when the debug toggle changed
    pub debug: Option<bool>,
}

/// Change handler for a toggle, called with the value before the flip
///
/// Stores `!previous` and reports what the host has to do about it.
pub fn apply_toggle(
    settings: &mut PluginSettings,
    key: SettingKey,
    previous: bool,
) -> ToggleChange {
    let value = !previous;
    settings.set(key, value);
    debug!("SETTINGS: {:?} = {}", key, value);

    let mut change = ToggleChange {
        key,
        value,
        notice: None,
        remove_add_buttons: false,
        debug: None,
    };
    match key {
        SettingKey::ShowAddCommand if value => {
            change.notice = Some(t("Please restart for these changes to take effect."));
        }
        SettingKey::ShowAddCommand => change.remove_add_buttons = true,
        SettingKey::Debug => change.debug = Some(value),
        SettingKey::ConfirmDeletion => {}
    }
    change
}

/// Where settings are persisted
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn save(&self, config: &Config) -> Result<PathBuf, ConfigError>;
}

/// Saves into the config file, at the XDG location unless a path is given
#[derive(Debug, Clone, Default)]
pub struct ConfigFileStore {
    path: Option<PathBuf>,
}

impl ConfigFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

#[async_trait]
impl SettingsStore for ConfigFileStore {
    async fn save(&self, config: &Config) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => {
                config::write_to(path, config)?;
                Ok(path.clone())
            }
            None => config::write(config),
        }
    }
}
