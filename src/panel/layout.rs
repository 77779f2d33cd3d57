use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::state::ActiveTabState;

/// Rendering mode supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// One region at a time: tab list or a tab's content
    Compact,
    /// Tab strip and content side by side
    #[default]
    Full,
}

impl FromStr for FormFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "mobile" => Ok(Self::Compact),
            "full" | "desktop" => Ok(Self::Full),
            other => Err(format!("Unknown form factor: {}", other)),
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => f.write_str("compact"),
            Self::Full => f.write_str("full"),
        }
    }
}

/// Where the credits line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditsPlacement {
    /// In the title header above the tab strip
    TitleArea,
    /// Below the tab list, in the content area
    ContentArea,
}

/// Regions of the panel to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title_header: bool,
    pub tab_strip: bool,
    pub content: bool,
    pub credits: Option<CreditsPlacement>,
}

/// Decide which regions are visible
///
/// | form factor | drilled_in | tab strip | content | credits      |
/// |-------------|------------|-----------|---------|--------------|
/// | full        | (ignored)  | yes       | yes     | title area   |
/// | compact     | true       | yes       | no      | content area |
/// | compact     | false      | no        | yes     | none         |
pub fn select_layout(form_factor: FormFactor, state: &ActiveTabState) -> Regions {
    match form_factor {
        FormFactor::Full => Regions {
            title_header: true,
            tab_strip: true,
            content: true,
            credits: Some(CreditsPlacement::TitleArea),
        },
        FormFactor::Compact if state.drilled_in() => Regions {
            title_header: false,
            tab_strip: true,
            content: false,
            credits: Some(CreditsPlacement::ContentArea),
        },
        FormFactor::Compact => Regions {
            title_header: false,
            tab_strip: false,
            content: true,
            credits: None,
        },
    }
}
