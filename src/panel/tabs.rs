use crate::l10n::t;
use crate::manager::ManagerKind;

use super::error::{PanelError, PanelResult};

/// Content provider for a tab
///
/// The panel never renders content itself; it only needs to know which
/// provider a tab uses and whether that provider can ask for the hiding view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    /// Plugin-wide option toggles
    General,
    /// Command list for one injection point; `hider_index` is set when the
    /// viewer can request the hiding view preselected at that section
    Commands {
        manager: ManagerKind,
        hider_index: Option<usize>,
    },
    /// Hidden-commands view, always the last tab
    Hider,
}

/// A panel tab: display name plus content provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    pub content: TabContent,
}

impl Tab {
    pub fn new(name: impl Into<String>, content: TabContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Ordered, immutable list of the panel's tabs
///
/// Built once per mount; the panel hands out borrowed views so tab identity
/// is stable for the whole mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
}

impl TabRegistry {
    /// Build a registry from an explicit tab list (at least one tab)
    pub fn new(tabs: Vec<Tab>) -> PanelResult<Self> {
        if tabs.is_empty() {
            return Err(PanelError::EmptyRegistry);
        }
        Ok(Self { tabs })
    }

    /// The panel's tab set: General, one viewer per injection point, Hide Commands
    pub fn standard() -> Self {
        let mut tabs = Vec::with_capacity(ManagerKind::ALL.len() + 2);
        tabs.push(Tab::new(t("General"), TabContent::General));
        tabs.extend(ManagerKind::ALL.iter().map(|kind| {
            Tab::new(
                kind.label(),
                TabContent::Commands {
                    manager: *kind,
                    hider_index: kind.hider_section(),
                },
            )
        }));
        tabs.push(Tab::new(t("Hide Commands"), TabContent::Hider));
        Self { tabs }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: a registry holds at least one tab
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Name of tab `index`, empty for an unknown index
    pub fn name(&self, index: usize) -> &str {
        self.tabs.get(index).map(|tab| tab.name.as_str()).unwrap_or("")
    }

    pub fn names(&self) -> Vec<&str> {
        self.tabs.iter().map(|tab| tab.name.as_str()).collect()
    }

    pub fn last_index(&self) -> usize {
        self.tabs.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let registry = TabRegistry::standard();
        assert_eq!(
            registry.names(),
            vec![
                "General",
                "Editor Menu",
                "File Menu",
                "Left Ribbon",
                "Right Ribbon",
                "Titlebar",
                "Statusbar",
                "Page Header",
                "Hide Commands",
            ]
        );
    }

    #[test]
    fn test_hider_is_last() {
        let registry = TabRegistry::standard();
        let last = registry.get(registry.last_index()).unwrap();
        assert_eq!(last.content, TabContent::Hider);
    }

    #[test]
    fn test_hider_jump_sources() {
        let registry = TabRegistry::standard();
        let sources: Vec<_> = registry
            .tabs()
            .iter()
            .filter_map(|tab| match tab.content {
                TabContent::Commands {
                    hider_index: Some(index),
                    ..
                } => Some((tab.name.as_str(), index)),
                _ => None,
            })
            .collect();
        assert_eq!(sources, vec![("Left Ribbon", 0), ("Statusbar", 1)]);
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(TabRegistry::new(Vec::new()), Err(PanelError::EmptyRegistry));
    }

    #[test]
    fn test_single_tab_registry() {
        let registry = TabRegistry::new(vec![Tab::new("Only", TabContent::General)]).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.last_index(), 0);
        assert_eq!(registry.name(5), "");
    }
}
