use std::sync::Arc;
use tracing::{debug, error, warn};

use super::action::Action;
use super::component::Effect;
use super::state::AppState;
use crate::config::Config;
use crate::l10n::t;
use crate::panel::{ClickHandler, CycleDirection, PanelSignal, TabContent};
use crate::settings::{apply_toggle, SettingKey, SettingsStore};

/// Apply `action` to the state, returning the effect to run afterwards
pub fn reduce(state: &mut AppState, action: Action) -> Effect {
    match action {
        Action::SelectTab(index) => {
            if let Some(panel) = state.panel.as_mut() {
                if let Err(e) = panel.select(index) {
                    error!("REDUCER: {}", e);
                }
            }
            Effect::None
        }
        Action::CycleKey(key) => {
            state.keys.publish(key);
            pump(state)
        }
        Action::Back => click_back(state),
        Action::OpenHider(index) => {
            state.signals.publish(PanelSignal::open_hider(index));
            pump(state)
        }
        Action::FocusSetting(direction) => {
            let count = SettingKey::ALL.len();
            let focused = state.ui.focused_setting;
            state.ui.focused_setting = match direction {
                CycleDirection::Forward => (focused + 1) % count,
                CycleDirection::Backward => (focused + count - 1) % count,
            };
            Effect::None
        }
        Action::ToggleFocusedSetting => toggle_focused_setting(state),
        Action::HiderSection(direction) => {
            if let Some(hider) = state.panel.as_mut().and_then(|panel| panel.hider_mut()) {
                match direction {
                    CycleDirection::Forward => hider.next_section(),
                    CycleDirection::Backward => hider.previous_section(),
                }
            }
            Effect::None
        }
        Action::SetNotice { message, is_error } => {
            state.host.post(message, is_error);
            Effect::None
        }
        Action::Pump => pump(state),
        Action::Quit => {
            state.close();
            Effect::None
        }
    }
}

fn pump(state: &mut AppState) -> Effect {
    if let Some(panel) = state.panel.as_mut() {
        match panel.pump() {
            Ok(true) => debug!("REDUCER: panel moved to {:?}", panel.state().current()),
            Ok(false) => {}
            Err(e) => {
                warn!("REDUCER: {}", e);
                state.host.post(e.to_string(), true);
            }
        }
    }
    Effect::None
}

/// Run whatever the host back control currently does
fn click_back(state: &mut AppState) -> Effect {
    let handlers = state.host.click_back();
    if handlers.is_empty() {
        // No back control: Esc closes the modal
        state.close();
        return Effect::None;
    }

    for handler in handlers {
        let close = match handler {
            ClickHandler::Panel(action) => state
                .panel
                .as_mut()
                .map(|panel| panel.handle_back(action))
                .unwrap_or(true),
            ClickHandler::Host(command) => {
                debug!("REDUCER: host back command {:?}", command);
                true
            }
        };
        if close {
            state.close();
            break;
        }
    }
    Effect::None
}

fn toggle_focused_setting(state: &mut AppState) -> Effect {
    let general_visible = state.panel().is_some_and(|panel| {
        panel.layout().content && panel.active_tab().content == TabContent::General
    });
    if !general_visible {
        return Effect::None;
    }

    let key = SettingKey::ALL[state.ui.focused_setting % SettingKey::ALL.len()];
    let previous = state.config.settings.get(key);
    let change = apply_toggle(&mut state.config.settings, key, previous);

    if change.remove_add_buttons {
        state.host.remove_add_buttons();
    }
    if let (Some(enabled), Some(log)) = (change.debug, state.log.as_ref()) {
        if let Err(e) = log.set_debug(enabled) {
            warn!("REDUCER: {}", e);
        }
    }

    save_settings_effect(state.store.clone(), state.config.clone(), change.notice)
}

fn save_settings_effect(
    store: Arc<dyn SettingsStore>,
    config: Config,
    notice: Option<&'static str>,
) -> Effect {
    Effect::Async(Box::pin(async move {
        match store.save(&config).await {
            Ok(path) => {
                debug!("CONFIG: saved to {}", path.display());
                Action::SetNotice {
                    message: notice.unwrap_or(t("Settings saved")).to_string(),
                    is_error: false,
                }
            }
            Err(e) => {
                error!("CONFIG: failed to save: {}", e);
                Action::SetNotice {
                    message: format!("{}: {}", t("Failed to save settings"), e),
                    is_error: true,
                }
            }
        }
    }))
}
