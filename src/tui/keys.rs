/// Keyboard event to action mapping for the host shell
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use crate::panel::{keyboard::cycle_direction, CycleDirection, TabContent};

/// Handle keys that work whatever is on screen
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    if cycle_direction(key).is_some() {
        return Some(Action::CycleKey(*key));
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        _ => None,
    }
}

/// Number keys click a tab while the strip is on screen
fn handle_tab_strip_keys(key: &KeyEvent, state: &AppState) -> Option<Action> {
    let panel = state.panel()?;
    if !panel.layout().tab_strip {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            (index < panel.registry().len()).then_some(Action::SelectTab(index))
        }
        // Compact list: open the highlighted tab
        KeyCode::Enter if !panel.layout().content => {
            Some(Action::SelectTab(panel.state().active_index()))
        }
        KeyCode::Down if !panel.layout().content => {
            Some(Action::CycleKey(KeyEvent::from(KeyCode::Tab)))
        }
        KeyCode::Up if !panel.layout().content => {
            Some(Action::CycleKey(KeyEvent::from(KeyCode::BackTab)))
        }
        _ => None,
    }
}

/// Keys handled by the content of the active tab
fn handle_content_keys(key: &KeyEvent, state: &AppState) -> Option<Action> {
    let panel = state.panel()?;
    if !panel.layout().content {
        return None;
    }
    match (&panel.active_tab().content, key.code) {
        (TabContent::General, KeyCode::Down) => {
            Some(Action::FocusSetting(CycleDirection::Forward))
        }
        (TabContent::General, KeyCode::Up) => {
            Some(Action::FocusSetting(CycleDirection::Backward))
        }
        (TabContent::General, KeyCode::Char(' ') | KeyCode::Enter) => {
            Some(Action::ToggleFocusedSetting)
        }
        (
            TabContent::Commands {
                hider_index: Some(index),
                ..
            },
            KeyCode::Char('h'),
        ) => Some(Action::OpenHider(*index)),
        (TabContent::Hider, KeyCode::Right) => {
            Some(Action::HiderSection(CycleDirection::Forward))
        }
        (TabContent::Hider, KeyCode::Left) => {
            Some(Action::HiderSection(CycleDirection::Backward))
        }
        _ => None,
    }
}

/// Convert a key event into an action, if it means anything right now
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    trace!("KEY: {:?}", key);

    handle_global_keys(&key)
        .or_else(|| handle_content_keys(&key, state))
        .or_else(|| handle_tab_strip_keys(&key, state))
}
