use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::bus::{Bus, Subscription};
use super::state::{ActiveTabState, CycleDirection};

/// Global key-down stream shared by everything mounted in the host
pub type KeyBus = Bus<KeyEvent>;

/// Map a key press to a cycle direction
///
/// Tab cycles forward and Shift+Tab backward. Terminals report Shift+Tab
/// either as `BackTab` or as `Tab` with the shift modifier; both count.
pub fn cycle_direction(key: &KeyEvent) -> Option<CycleDirection> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::BackTab => Some(CycleDirection::Backward),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(CycleDirection::Backward)
        }
        KeyCode::Tab => Some(CycleDirection::Forward),
        _ => None,
    }
}

/// Cycles the active tab from the global key stream while the panel is mounted
///
/// Keys are queued on the subscription and applied to the live state when
/// [`KeyboardCycler::apply`] runs, so a cycle always starts from the index
/// current at that moment. The subscription is released when the cycler
/// drops.
pub struct KeyboardCycler {
    keys: Subscription<KeyEvent>,
}

impl KeyboardCycler {
    pub fn mount(bus: &KeyBus) -> Self {
        Self {
            keys: bus.subscribe(),
        }
    }

    /// Apply every queued cycle key, returning how many moved the state
    pub fn apply(&mut self, state: &mut ActiveTabState) -> usize {
        let mut applied = 0;
        for key in self.keys.drain() {
            if let Some(direction) = cycle_direction(&key) {
                state.cycle(direction);
                applied += 1;
            }
        }
        if applied > 0 {
            debug!(
                "KEYS: applied {} cycle keys, active tab now {}",
                applied,
                state.active_index()
            );
        }
        applied
    }
}
