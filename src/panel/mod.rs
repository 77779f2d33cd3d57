//! Navigation core of the settings panel.
//!
//! [`SettingsPanel`] ties the pieces together: it owns the tab registry and
//! the [`ActiveTabState`], holds the keyboard and jump subscriptions for as
//! long as it is mounted, keeps the host back control in sync on the compact
//! form factor, and mounts the hiding content whenever it is on screen.

pub mod bus;
pub mod chrome;
pub mod error;
pub mod hider;
pub mod jump;
pub mod keyboard;
pub mod layout;
pub mod state;
pub mod tabs;

pub use bus::{Bus, Subscription};
pub use chrome::{
    BackAction, ChromeNode, ClickHandler, HostChromeAdapter, HostCommand, HostDocument,
    SharedDocument, BACK_BUTTON_SELECTOR,
};
pub use error::{PanelError, PanelResult};
pub use hider::HiderContent;
pub use jump::{ExternalJumpListener, JumpDelivery, PanelSignal, SignalBus, SignalKind};
pub use keyboard::{KeyBus, KeyboardCycler};
pub use layout::{select_layout, CreditsPlacement, FormFactor, Regions};
pub use state::{ActiveTabState, CycleDirection};
pub use tabs::{Tab, TabContent, TabRegistry};

use tracing::{debug, info};

use crate::manager::HiddenCommands;

/// Mount-time options supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Display name, shown on the back control while the tab list is showing
    pub name: String,
    pub form_factor: FormFactor,
    pub jump_delivery: JumpDelivery,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            name: "Commander".to_string(),
            form_factor: FormFactor::Full,
            jump_delivery: JumpDelivery::default(),
        }
    }
}

/// A mounted settings panel
///
/// Dropping the panel unmounts it: the key and signal subscriptions are
/// released and pending jump timers are aborted.
pub struct SettingsPanel {
    options: PanelOptions,
    registry: TabRegistry,
    state: ActiveTabState,
    signals: SignalBus,
    cycler: KeyboardCycler,
    jump: ExternalJumpListener,
    chrome: HostChromeAdapter,
    hider: Option<HiderContent>,
    chrome_synced: Option<(usize, bool)>,
}

impl SettingsPanel {
    /// Mount the panel into the host
    ///
    /// On the compact form factor this takes over the host back control and
    /// forces the tab list to show.
    pub fn mount(
        options: PanelOptions,
        registry: TabRegistry,
        keys: &KeyBus,
        signals: &SignalBus,
        document: SharedDocument,
    ) -> PanelResult<Self> {
        let state = ActiveTabState::new(registry.len())?;
        let mut panel = Self {
            cycler: KeyboardCycler::mount(keys),
            jump: ExternalJumpListener::mount(signals, options.jump_delivery),
            chrome: HostChromeAdapter::new(document),
            signals: signals.clone(),
            hider: None,
            chrome_synced: None,
            options,
            registry,
            state,
        };

        if panel.options.form_factor == FormFactor::Compact {
            panel.chrome.take_over();
            panel.state.set_drilled_in(true);
        }
        panel.refresh();

        info!(
            "PANEL: mounted {:?} with {} tabs ({})",
            panel.options.name,
            panel.registry.len(),
            panel.options.form_factor
        );
        Ok(panel)
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn form_factor(&self) -> FormFactor {
        self.options.form_factor
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ActiveTabState {
        &self.state
    }

    pub fn signals(&self) -> &SignalBus {
        &self.signals
    }

    pub fn chrome(&self) -> &HostChromeAdapter {
        &self.chrome
    }

    /// Regions to render for the current state
    pub fn layout(&self) -> Regions {
        select_layout(self.options.form_factor, &self.state)
    }

    pub fn active_tab(&self) -> &Tab {
        &self.registry.tabs()[self.state.active_index()]
    }

    /// Hiding content, while it is mounted
    pub fn hider(&self) -> Option<&HiderContent> {
        self.hider.as_ref()
    }

    pub fn hider_mut(&mut self) -> Option<&mut HiderContent> {
        self.hider.as_mut()
    }

    /// Tab click: open tab `index`
    pub fn select(&mut self, index: usize) -> PanelResult<()> {
        self.state.select(index)?;
        self.refresh();
        Ok(())
    }

    pub fn set_drilled_in(&mut self, drilled_in: bool) {
        self.state.set_drilled_in(drilled_in);
        self.refresh();
    }

    /// Run a back-control action the panel installed
    ///
    /// Returns `true` when the action has to be carried out by the host
    /// (closing the surface).
    pub fn handle_back(&mut self, action: BackAction) -> bool {
        match action {
            BackAction::ReturnToList => {
                debug!("PANEL: back to tab list");
                self.set_drilled_in(true);
                false
            }
            BackAction::CloseSurface => true,
        }
    }

    /// Process queued key cycles, jump requests and tab-internal signals
    ///
    /// Returns whether the active tab or drill state changed.
    pub fn pump(&mut self) -> PanelResult<bool> {
        let before = self.state.current();
        self.cycler.apply(&mut self.state);
        self.jump.apply(&mut self.state)?;
        self.refresh();
        Ok(self.state.current() != before)
    }

    /// Unmount explicitly; equivalent to dropping the panel
    pub fn unmount(self) {
        debug!("PANEL: unmounting {:?}", self.options.name);
    }

    fn refresh(&mut self) {
        self.sync_mounts();
        self.sync_chrome();
    }

    fn sync_mounts(&mut self) {
        let hider_visible =
            self.layout().content && self.active_tab().content == TabContent::Hider;

        match (hider_visible, self.hider.is_some()) {
            (true, false) => {
                self.hider = Some(HiderContent::mount(
                    &self.signals,
                    HiddenCommands::SECTION_COUNT,
                ));
            }
            (false, true) => {
                debug!("HIDER: unmounted");
                self.hider = None;
            }
            _ => {}
        }

        if let Some(hider) = self.hider.as_mut() {
            // Hand over a jump index released while the content was off screen
            self.jump.content_ready();
            hider.apply();
        }
    }

    fn sync_chrome(&mut self) {
        if self.options.form_factor != FormFactor::Compact {
            return;
        }
        let current = self.state.current();
        if self.chrome_synced == Some(current) {
            return;
        }
        if self
            .chrome
            .sync(&self.state, &self.options.name, &self.registry)
        {
            self.chrome_synced = Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    struct Host {
        keys: KeyBus,
        signals: SignalBus,
        document: SharedDocument,
    }

    impl Host {
        fn new(with_back_button: bool) -> Self {
            let mut document = HostDocument::new();
            if with_back_button {
                let node = document.insert(
                    BACK_BUTTON_SELECTOR,
                    vec!["<".to_string(), "Options".to_string()],
                );
                node.set_on_click(ClickHandler::Host(HostCommand::CloseActiveTab));
            }
            Self {
                keys: KeyBus::new(),
                signals: SignalBus::new(),
                document: document.shared(),
            }
        }

        fn mount(&self, form_factor: FormFactor) -> SettingsPanel {
            SettingsPanel::mount(
                PanelOptions {
                    form_factor,
                    ..PanelOptions::default()
                },
                TabRegistry::standard(),
                &self.keys,
                &self.signals,
                self.document.clone(),
            )
            .unwrap()
        }

        fn press(&self, code: KeyCode, modifiers: KeyModifiers) {
            self.keys.publish(KeyEvent::new(code, modifiers));
        }

        fn back_label(&self) -> Option<String> {
            self.document
                .lock()
                .query(BACK_BUTTON_SELECTOR)
                .and_then(|node| node.label().map(str::to_string))
        }

        fn click_back(&self) -> Vec<ClickHandler> {
            self.document.lock().click(BACK_BUTTON_SELECTOR)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_compact_navigation_scenario() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Compact);
        assert_eq!(panel.state().current(), (0, true));

        for _ in 0..9 {
            host.press(KeyCode::Tab, KeyModifiers::NONE);
        }
        panel.pump().unwrap();
        assert_eq!(panel.state().active_index(), 0);

        panel.select(3).unwrap();
        assert_eq!(panel.state().current(), (3, false));

        host.signals.publish(PanelSignal::open_hider(1));
        assert!(panel.pump().unwrap());
        assert_eq!(panel.state().current(), (8, true));

        // Compact list view: the hiding content is not on screen yet
        assert!(panel.hider().is_none());
        panel.select(8).unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(0));

        tokio::time::sleep(Duration::from_millis(60)).await;
        panel.pump().unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_compact_jump_index_survives_until_hider_opens() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Compact);
        panel.select(6).unwrap();

        host.signals.publish(PanelSignal::open_hider(1));
        panel.pump().unwrap();
        assert_eq!(panel.state().current(), (8, true));
        assert!(!panel.layout().content);

        // The delay elapses while the tab list is still showing
        tokio::time::sleep(Duration::from_millis(60)).await;
        panel.pump().unwrap();
        assert!(panel.hider().is_none());

        panel.select(8).unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_jump_while_hider_is_open_preselects_again() {
        let host = Host::new(false);
        let mut panel = host.mount(FormFactor::Full);
        panel.select(8).unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(0));

        host.signals.publish(PanelSignal::open_hider(1));
        panel.pump().unwrap();
        tokio::time::sleep(Duration::from_millis(51)).await;
        panel.pump().unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_jump_preselects_after_delay() {
        let host = Host::new(false);
        let mut panel = host.mount(FormFactor::Full);
        panel.select(3).unwrap();

        host.signals.publish(PanelSignal::open_hider(1));
        panel.pump().unwrap();
        assert_eq!(panel.state().current(), (8, true));
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(0));

        tokio::time::sleep(Duration::from_millis(51)).await;
        panel.pump().unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(1));
    }

    #[test]
    fn test_on_ready_delivery_waits_for_content() {
        let host = Host::new(true);
        let mut panel = SettingsPanel::mount(
            PanelOptions {
                form_factor: FormFactor::Compact,
                jump_delivery: JumpDelivery::OnReady,
                ..PanelOptions::default()
            },
            TabRegistry::standard(),
            &host.keys,
            &host.signals,
            host.document.clone(),
        )
        .unwrap();

        host.signals.publish(PanelSignal::open_hider(1));
        panel.pump().unwrap();
        assert!(panel.hider().is_none());

        // User opens the hiding tab from the list; content mounts and receives the index
        panel.select(8).unwrap();
        assert_eq!(panel.hider().map(HiderContent::selected_section), Some(1));
    }

    #[test]
    fn test_compact_mount_forces_tab_list_and_strips_host_handler() {
        let host = Host::new(true);
        let panel = host.mount(FormFactor::Compact);

        assert!(panel.state().drilled_in());
        assert!(panel.chrome().taken_over());
        assert_eq!(host.back_label().as_deref(), Some("Commander"));
        assert_eq!(
            host.click_back(),
            vec![ClickHandler::Panel(BackAction::CloseSurface)]
        );
    }

    #[test]
    fn test_back_control_alternates_with_drill_state() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Compact);
        panel.select(6).unwrap();

        for drilled_in in [false, true, false, true] {
            panel.set_drilled_in(drilled_in);
            if drilled_in {
                assert_eq!(host.back_label().as_deref(), Some("Commander"));
                assert_eq!(
                    host.click_back(),
                    vec![ClickHandler::Panel(BackAction::CloseSurface)]
                );
            } else {
                assert_eq!(host.back_label().as_deref(), Some("Statusbar"));
                assert_eq!(
                    host.click_back(),
                    vec![ClickHandler::Panel(BackAction::ReturnToList)]
                );
            }
        }
    }

    #[test]
    fn test_back_label_follows_cycling_while_drilled_in() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Compact);
        panel.select(1).unwrap();

        host.press(KeyCode::BackTab, KeyModifiers::SHIFT);
        panel.pump().unwrap();
        assert_eq!(host.back_label().as_deref(), Some("General"));
    }

    #[test]
    fn test_handle_back() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Compact);
        panel.select(2).unwrap();

        assert!(!panel.handle_back(BackAction::ReturnToList));
        assert_eq!(panel.state().current(), (2, true));
        assert!(panel.handle_back(BackAction::CloseSurface));
    }

    #[test]
    fn test_full_form_factor_leaves_document_alone() {
        let host = Host::new(true);
        let mut panel = host.mount(FormFactor::Full);
        panel.select(4).unwrap();
        panel.set_drilled_in(true);

        assert!(!panel.chrome().taken_over());
        assert_eq!(host.back_label().as_deref(), Some("Options"));
        assert_eq!(
            host.click_back(),
            vec![ClickHandler::Host(HostCommand::CloseActiveTab)]
        );
    }

    #[test]
    fn test_compact_without_back_control_does_not_fail() {
        let host = Host::new(false);
        let mut panel = host.mount(FormFactor::Compact);
        panel.select(2).unwrap();
        panel.set_drilled_in(true);
        assert!(host.document.lock().is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_an_error() {
        let host = Host::new(false);
        let mut panel = host.mount(FormFactor::Full);
        assert_eq!(
            panel.select(9),
            Err(PanelError::TabOutOfRange { index: 9, len: 9 })
        );
        assert_eq!(panel.state().current(), (0, true));
    }

    #[test]
    fn test_unmount_releases_every_listener() {
        let host = Host::new(false);
        let first = host.mount(FormFactor::Full);
        let second = host.mount(FormFactor::Full);
        assert_eq!(host.keys.subscriber_count(), 2);
        assert_eq!(host.signals.subscriber_count(), 2);

        first.unmount();
        drop(second);
        assert_eq!(host.keys.subscriber_count(), 0);
        assert_eq!(host.signals.subscriber_count(), 0);
    }

    #[test]
    fn test_hider_unmounts_when_leaving_tab() {
        let host = Host::new(false);
        let mut panel = host.mount(FormFactor::Full);
        panel.select(8).unwrap();
        assert!(panel.hider().is_some());
        assert_eq!(host.signals.subscriber_count(), 2);

        host.press(KeyCode::Tab, KeyModifiers::NONE);
        panel.pump().unwrap();
        assert_eq!(panel.state().active_index(), 0);
        assert!(panel.hider().is_none());
        assert_eq!(host.signals.subscriber_count(), 1);
    }
}
