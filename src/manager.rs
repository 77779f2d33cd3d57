//! Command managers: the per-injection-point command lists the panel edits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::l10n::t;

/// A command placed at an injection point, with the icon shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandIconPair {
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    "star".to_string()
}

impl CommandIconPair {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Host UI locations where commands can be injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerKind {
    EditorMenu,
    FileMenu,
    LeftRibbon,
    RightRibbon,
    TitleBar,
    StatusBar,
    PageHeader,
}

impl ManagerKind {
    /// All kinds, in the order their tabs appear
    pub const ALL: [ManagerKind; 7] = [
        ManagerKind::EditorMenu,
        ManagerKind::FileMenu,
        ManagerKind::LeftRibbon,
        ManagerKind::RightRibbon,
        ManagerKind::TitleBar,
        ManagerKind::StatusBar,
        ManagerKind::PageHeader,
    ];

    /// Localized tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::EditorMenu => t("Editor Menu"),
            Self::FileMenu => t("File Menu"),
            Self::LeftRibbon => t("Left Ribbon"),
            Self::RightRibbon => t("Right Ribbon"),
            Self::TitleBar => t("Titlebar"),
            Self::StatusBar => t("Statusbar"),
            Self::PageHeader => t("Page Header"),
        }
    }

    /// Section of the hiding view this manager's viewer can jump to
    pub fn hider_section(&self) -> Option<usize> {
        match self {
            Self::LeftRibbon => Some(HiddenCommands::LEFT_RIBBON),
            Self::StatusBar => Some(HiddenCommands::STATUS_BAR),
            _ => None,
        }
    }
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Command lists for every injection point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandManagers {
    pub editor_menu: Vec<CommandIconPair>,
    pub file_menu: Vec<CommandIconPair>,
    pub left_ribbon: Vec<CommandIconPair>,
    pub right_ribbon: Vec<CommandIconPair>,
    pub title_bar: Vec<CommandIconPair>,
    pub status_bar: Vec<CommandIconPair>,
    pub page_header: Vec<CommandIconPair>,
    pub hide: HiddenCommands,
}

impl CommandManagers {
    pub fn get(&self, kind: ManagerKind) -> &[CommandIconPair] {
        match kind {
            ManagerKind::EditorMenu => &self.editor_menu,
            ManagerKind::FileMenu => &self.file_menu,
            ManagerKind::LeftRibbon => &self.left_ribbon,
            ManagerKind::RightRibbon => &self.right_ribbon,
            ManagerKind::TitleBar => &self.title_bar,
            ManagerKind::StatusBar => &self.status_bar,
            ManagerKind::PageHeader => &self.page_header,
        }
    }
}

/// Commands the user hid from the host's own ribbon and status bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenCommands {
    pub left_ribbon: Vec<String>,
    pub status_bar: Vec<String>,
}

impl HiddenCommands {
    pub const LEFT_RIBBON: usize = 0;
    pub const STATUS_BAR: usize = 1;
    pub const SECTION_COUNT: usize = 2;

    /// Section by jump index, `None` when the index is outside the known sections
    pub fn section(&self, index: usize) -> Option<(&'static str, &[String])> {
        match index {
            Self::LEFT_RIBBON => Some((t("Left Ribbon"), &self.left_ribbon)),
            Self::STATUS_BAR => Some((t("Statusbar"), &self.status_bar)),
            _ => None,
        }
    }
}
