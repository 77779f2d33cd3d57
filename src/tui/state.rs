use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::logging::LogHandle;
use crate::manager::ManagerKind;
use crate::panel::{
    ClickHandler, FormFactor, HostCommand, HostDocument, KeyBus, PanelResult, SettingsPanel,
    SharedDocument, SignalBus, TabRegistry, BACK_BUTTON_SELECTOR,
};
use crate::settings::SettingsStore;

/// Line shown at the bottom of the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// The application hosting the settings surface
///
/// Owns the chrome document the panel writes its back control into, the
/// notice line, and the "add command" buttons injected into each menu.
pub struct HostShell {
    document: SharedDocument,
    pub notice: Option<Notice>,
    pub add_buttons: usize,
    open: bool,
}

impl HostShell {
    /// Host label on the back control before a panel takes it over
    pub const BACK_LABEL: &'static str = "Options";

    pub fn new(form_factor: FormFactor, show_add_command: bool) -> Self {
        let mut document = HostDocument::new();
        if form_factor == FormFactor::Compact {
            let node = document.insert(
                BACK_BUTTON_SELECTOR,
                vec!["‹".to_string(), Self::BACK_LABEL.to_string()],
            );
            node.add_listener(ClickHandler::Host(HostCommand::NavigateBack));
            node.set_on_click(ClickHandler::Host(HostCommand::CloseActiveTab));
        }
        Self {
            document: document.shared(),
            notice: None,
            add_buttons: if show_add_command {
                ManagerKind::ALL.len()
            } else {
                0
            },
            open: true,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Current label of the back control, if the host has one
    pub fn back_label(&self) -> Option<String> {
        self.document
            .lock()
            .query(BACK_BUTTON_SELECTOR)
            .and_then(|node| node.label().map(str::to_string))
    }

    /// Handlers a click on the back control runs
    pub fn click_back(&self) -> Vec<ClickHandler> {
        self.document.lock().click(BACK_BUTTON_SELECTOR)
    }

    pub fn remove_add_buttons(&mut self) {
        debug!("HOST: removing {} add-command buttons", self.add_buttons);
        self.add_buttons = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn post(&mut self, message: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            message: message.into(),
            is_error,
        });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Focused row on the General tab
    pub focused_setting: usize,
}

/// Everything the reducer works on
pub struct AppState {
    pub config: Config,
    pub keys: KeyBus,
    pub signals: SignalBus,
    pub host: HostShell,
    pub panel: Option<SettingsPanel>,
    pub ui: UiState,
    pub store: Arc<dyn SettingsStore>,
    pub log: Option<LogHandle>,
}

impl AppState {
    /// Open the settings surface and mount the panel into it
    pub fn open(
        config: Config,
        store: Arc<dyn SettingsStore>,
        log: Option<LogHandle>,
    ) -> PanelResult<Self> {
        let keys = KeyBus::new();
        let signals = SignalBus::new();
        let host = HostShell::new(config.form_factor, config.settings.show_add_command);
        let panel = SettingsPanel::mount(
            config.panel_options(),
            TabRegistry::standard(),
            &keys,
            &signals,
            host.document().clone(),
        )?;

        Ok(Self {
            config,
            keys,
            signals,
            host,
            panel: Some(panel),
            ui: UiState::default(),
            store,
            log,
        })
    }

    pub fn panel(&self) -> Option<&SettingsPanel> {
        self.panel.as_ref()
    }

    /// Unmount the panel and close the surface
    pub fn close(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.unmount();
        }
        self.host.open = false;
        info!("HOST: settings surface closed");
    }
}
