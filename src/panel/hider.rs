use tracing::{debug, warn};

use super::bus::Subscription;
use super::jump::{PanelSignal, SignalBus, SignalKind};

/// Mounted state of the hiding view's content
///
/// Exists only while the hiding tab's content is on screen. It listens for
/// the tab-internal preselect signal and keeps the selected section.
pub struct HiderContent {
    signals: Subscription<PanelSignal>,
    section_count: usize,
    selected_section: usize,
}

impl HiderContent {
    pub fn mount(bus: &SignalBus, section_count: usize) -> Self {
        debug!("HIDER: mounted with {} sections", section_count);
        Self {
            signals: bus.subscribe(),
            section_count,
            selected_section: 0,
        }
    }

    pub fn selected_section(&self) -> usize {
        self.selected_section
    }

    /// Apply queued preselect signals; returns the last section applied
    pub fn apply(&mut self) -> Option<usize> {
        let mut applied = None;
        for signal in self.signals.drain() {
            if signal.kind != SignalKind::HiderSelect {
                continue;
            }
            if signal.index < self.section_count {
                self.selected_section = signal.index;
                applied = Some(signal.index);
            } else {
                warn!(
                    "HIDER: ignoring preselect of section {} ({} sections)",
                    signal.index, self.section_count
                );
            }
        }
        if let Some(index) = applied {
            debug!("HIDER: preselected section {}", index);
        }
        applied
    }

    pub fn next_section(&mut self) {
        if self.section_count > 0 {
            self.selected_section = (self.selected_section + 1) % self.section_count;
        }
    }

    pub fn previous_section(&mut self) {
        if self.section_count > 0 {
            self.selected_section =
                (self.selected_section + self.section_count - 1) % self.section_count;
        }
    }
}
