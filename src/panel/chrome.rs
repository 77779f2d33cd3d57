//! Host-owned chrome and the adapter that takes over its back control.
//!
//! The host renders a "back" control above the settings surface on the
//! compact form factor. The host arrives with its own click listeners wired
//! to it; the adapter swaps the node for a listener-free copy exactly once and
//! from then on owns its label and click handler.

use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use super::state::ActiveTabState;
use super::tabs::TabRegistry;

/// Selector of the host's back control
pub const BACK_BUTTON_SELECTOR: &str = ".modal-setting-back-button";

/// Host-side behaviour a click can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Close the settings tab currently shown by the host
    CloseActiveTab,
    /// Navigate the host's own settings sidebar back one level
    NavigateBack,
}

/// Behaviour the panel installs on the back control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Delegate to the host and close the whole settings surface
    CloseSurface,
    /// Leave the open tab and show the tab list again
    ReturnToList,
}

/// A click handler attached to a chrome node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickHandler {
    Host(HostCommand),
    Panel(BackAction),
}

/// A node of host chrome
///
/// The last child holds the visible label. Handlers come in two flavours like
/// in the host toolkit: any number of attached listeners, plus a single
/// assignable `on_click` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeNode {
    id: u64,
    children: Vec<String>,
    listeners: Vec<ClickHandler>,
    on_click: Option<ClickHandler>,
}

impl ChromeNode {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.children.last().map(String::as_str)
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn listeners(&self) -> &[ClickHandler] {
        &self.listeners
    }

    pub fn on_click(&self) -> Option<ClickHandler> {
        self.on_click
    }

    pub fn add_listener(&mut self, handler: ClickHandler) {
        self.listeners.push(handler);
    }

    pub fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    pub fn set_label(&mut self, label: &str) {
        match self.children.last_mut() {
            Some(last) => {
                last.clear();
                last.push_str(label);
            }
            None => self.children.push(label.to_string()),
        }
    }

    /// Every handler a click fires, listeners first
    fn handlers(&self) -> Vec<ClickHandler> {
        self.listeners.iter().copied().chain(self.on_click).collect()
    }
}

/// The host's document: chrome nodes addressable by selector
#[derive(Debug, Default)]
pub struct HostDocument {
    next_id: u64,
    nodes: HashMap<String, ChromeNode>,
}

/// Document shared between the host shell and the panel
pub type SharedDocument = Arc<Mutex<HostDocument>>;

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    /// Create a node under `selector` with the given children, replacing any previous one
    pub fn insert(&mut self, selector: &str, children: Vec<String>) -> &mut ChromeNode {
        let node = ChromeNode {
            id: self.allocate_id(),
            children,
            listeners: Vec::new(),
            on_click: None,
        };
        match self.nodes.entry(selector.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(node);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(node),
        }
    }

    pub fn remove(&mut self, selector: &str) -> Option<ChromeNode> {
        self.nodes.remove(selector)
    }

    pub fn query(&self, selector: &str) -> Option<&ChromeNode> {
        self.nodes.get(selector)
    }

    pub fn query_mut(&mut self, selector: &str) -> Option<&mut ChromeNode> {
        self.nodes.get_mut(selector)
    }

    /// Swap the node for a copy without any handlers, keeping its position
    ///
    /// The copy gets a fresh identity; the original is dropped along with
    /// everything attached to it. Returns `false` if no node matches.
    pub fn replace_with_clone(&mut self, selector: &str) -> bool {
        if !self.nodes.contains_key(selector) {
            return false;
        }
        let id = self.allocate_id();
        match self.nodes.get_mut(selector) {
            Some(node) => {
                *node = ChromeNode {
                    id,
                    children: std::mem::take(&mut node.children),
                    listeners: Vec::new(),
                    on_click: None,
                };
                true
            }
            None => false,
        }
    }

    /// Click the node, returning the handlers that fired
    pub fn click(&self, selector: &str) -> Vec<ClickHandler> {
        self.nodes
            .get(selector)
            .map(ChromeNode::handlers)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Label and handler the back control should carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeSync {
    pub label: String,
    pub action: BackAction,
}

impl ChromeSync {
    /// What the back control should look like for `state`
    pub fn for_state(state: &ActiveTabState, panel_name: &str, tabs: &TabRegistry) -> Self {
        if state.drilled_in() {
            Self {
                label: panel_name.to_string(),
                action: BackAction::CloseSurface,
            }
        } else {
            Self {
                label: tabs.name(state.active_index()).to_string(),
                action: BackAction::ReturnToList,
            }
        }
    }
}

/// Keeps the host back control in agreement with the panel state
pub struct HostChromeAdapter {
    document: SharedDocument,
    selector: &'static str,
    taken_over: bool,
    last_sync: Option<ChromeSync>,
}

impl HostChromeAdapter {
    pub fn new(document: SharedDocument) -> Self {
        Self {
            document,
            selector: BACK_BUTTON_SELECTOR,
            taken_over: false,
            last_sync: None,
        }
    }

    pub fn taken_over(&self) -> bool {
        self.taken_over
    }

    pub fn last_sync(&self) -> Option<&ChromeSync> {
        self.last_sync.as_ref()
    }

    /// Take exclusive ownership of the back control
    ///
    /// Runs at most once per adapter. Returns `false`, without touching the
    /// document, when the host has no back control (full form factor, or host
    /// chrome not mounted yet).
    pub fn take_over(&mut self) -> bool {
        if self.taken_over {
            return true;
        }
        let replaced = self.document.lock().replace_with_clone(self.selector);
        if replaced {
            debug!("CHROME: took over {}", self.selector);
            self.taken_over = true;
        } else {
            trace!("CHROME: {} not present, skipping takeover", self.selector);
        }
        replaced
    }

    /// Write the label and click handler matching `state`
    ///
    /// Returns `false` when there is no back control to update.
    pub fn sync(&mut self, state: &ActiveTabState, panel_name: &str, tabs: &TabRegistry) -> bool {
        let wanted = ChromeSync::for_state(state, panel_name, tabs);
        let mut document = self.document.lock();
        let Some(node) = document.query_mut(self.selector) else {
            trace!("CHROME: {} not present, skipping sync", self.selector);
            return false;
        };

        node.set_label(&wanted.label);
        node.set_on_click(ClickHandler::Panel(wanted.action));
        debug!("CHROME: back control -> {:?} ({:?})", wanted.label, wanted.action);
        self.last_sync = Some(wanted);
        true
    }
}
