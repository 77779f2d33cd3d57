use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;
use crate::manager::CommandManagers;
use crate::panel::{FormFactor, JumpDelivery, PanelOptions};
use crate::settings::PluginSettings;

const ORANGE: Color = Color::Rgb(255, 165, 0);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine config directory")]
    NoConfigDir,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How the hiding view receives the section index after a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpDeliveryMode {
    /// After `jump_delay_ms`
    #[default]
    Delay,
    /// As soon as the hiding view is mounted
    Ready,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub panel_name: String,
    pub form_factor: FormFactor,
    pub jump_delay_ms: u64,
    pub jump_delivery: JumpDeliveryMode,
    pub use_unicode: bool,
    pub settings: PluginSettings,
    pub commands: CommandManagers,
    pub theme: ThemeConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(
        deserialize_with = "deserialize_color",
        serialize_with = "serialize_color"
    )]
    pub selection_fg: Color,
    #[serde(
        deserialize_with = "deserialize_color_optional",
        serialize_with = "serialize_color_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub unfocused_selection_fg: Option<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            panel_name: "Commander".to_string(),
            form_factor: FormFactor::Full,
            jump_delay_ms: 50,
            jump_delivery: JumpDeliveryMode::Delay,
            use_unicode: true,
            settings: PluginSettings::default(),
            commands: CommandManagers::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: ORANGE,
            unfocused_selection_fg: None,
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg
            .unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl Config {
    pub fn jump_delivery(&self) -> JumpDelivery {
        match self.jump_delivery {
            JumpDeliveryMode::Delay => {
                JumpDelivery::Delay(Duration::from_millis(self.jump_delay_ms))
            }
            JumpDeliveryMode::Ready => JumpDelivery::OnReady,
        }
    }

    /// Mount options for the settings panel
    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            name: self.panel_name.clone(),
            form_factor: self.form_factor,
            jump_delivery: self.jump_delivery(),
        }
    }

    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.theme.selection_fg,
            unfocused_selection_fg: self.theme.unfocused_selection_fg(),
            error_fg: Color::Red,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

/// Resolved rendering options handed to widgets
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Color,
    pub error_fg: Color,
    pub box_chars: BoxChars,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

/// Scale each RGB channel by `factor`; named colors pass through
fn darken_color(color: Color, factor: f32) -> Color {
    let scale = |channel: u8| (f32::from(channel) * factor) as u8;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        other => other,
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&color_to_string(*color))
}

fn serialize_color_optional<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match color {
        Some(color) => serializer.serialize_str(&color_to_string(*color)),
        None => serializer.serialize_none(),
    }
}

fn color_to_string(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => other.to_string().to_lowercase(),
    }
}

/// Parse a config color: a ratatui color name or `#rrggbb`, plus `orange`,
/// short `#rgb` and `r,g,b` triples
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    if s == "orange" {
        return Some(ORANGE);
    }
    if let Some(hex) = s.strip_prefix('#').filter(|hex| hex.len() == 3) {
        let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
        return parse_rgb_hex(&expanded);
    }
    if s.contains(',') {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return match channels[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }
    // Bare numbers would parse as indexed colors
    s.parse::<Color>()
        .ok()
        .filter(|color| !matches!(color, Color::Indexed(_)))
}

fn parse_rgb_hex(hex: &str) -> Option<Color> {
    let value = u32::from_str_radix(hex, 16).ok()?;
    let [_, r, g, b] = value.to_be_bytes();
    Some(Color::Rgb(r, g, b))
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    match get_config_path() {
        Some(path) => read_from(&path),
        None => Config::default(),
    }
}

/// Read config from `path`, falling back to defaults if missing or invalid
pub fn read_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("CONFIG: failed to read {}: {}", path.display(), e);
            return Config::default();
        }
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("CONFIG: invalid {}: {}", path.display(), e);
        Config::default()
    })
}

/// Persist config to the default location, returning the path written
pub fn write(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    write_to(&path, config)?;
    Ok(path)
}

pub fn write_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
