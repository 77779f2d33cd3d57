use tracing::trace;

use super::error::{PanelError, PanelResult};

/// Direction for keyboard tab cycling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// Which tab is active, and whether the compact view shows the tab list
///
/// This is the single source of truth for panel navigation. Clicks, key
/// cycling, the host back control and external jump signals all mutate it
/// through the methods below.
///
/// `drilled_in` mirrors the host's back-navigation state: it is `true` while
/// the compact view shows the tab list and becomes `false` once a tab's
/// content has been opened. The full form factor ignores it when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTabState {
    active_index: usize,
    drilled_in: bool,
    tab_count: usize,
}

impl ActiveTabState {
    /// Fresh state for a panel with `tab_count` tabs: first tab, list showing
    pub fn new(tab_count: usize) -> PanelResult<Self> {
        if tab_count == 0 {
            return Err(PanelError::EmptyRegistry);
        }
        Ok(Self {
            active_index: 0,
            drilled_in: true,
            tab_count,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn drilled_in(&self) -> bool {
        self.drilled_in
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Current `(active_index, drilled_in)` pair
    pub fn current(&self) -> (usize, bool) {
        (self.active_index, self.drilled_in)
    }

    /// Open tab `index`, leaving the compact tab list
    pub fn select(&mut self, index: usize) -> PanelResult<()> {
        if index >= self.tab_count {
            return Err(PanelError::TabOutOfRange {
                index,
                len: self.tab_count,
            });
        }
        trace!("PANEL: select {} -> {}", self.active_index, index);
        self.active_index = index;
        self.drilled_in = false;
        Ok(())
    }

    /// Move to the neighbouring tab with wraparound; `drilled_in` is untouched
    pub fn cycle(&mut self, direction: CycleDirection) {
        let n = self.tab_count;
        let next = match direction {
            CycleDirection::Forward => (self.active_index + 1) % n,
            CycleDirection::Backward => (self.active_index + n - 1) % n,
        };
        trace!("PANEL: cycle {:?} {} -> {}", direction, self.active_index, next);
        self.active_index = next;
    }

    pub fn set_drilled_in(&mut self, drilled_in: bool) {
        self.drilled_in = drilled_in;
    }

    /// Index of the last tab, where the hiding view always lives
    pub fn last_index(&self) -> usize {
        self.tab_count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ActiveTabState::new(9).unwrap();
        assert_eq!(state.current(), (0, true));
        assert_eq!(state.last_index(), 8);
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(ActiveTabState::new(0), Err(PanelError::EmptyRegistry));
    }

    #[test]
    fn test_cycle_forward_n_times_is_identity() {
        for n in 1..=12 {
            for start in 0..n {
                let mut state = ActiveTabState::new(n).unwrap();
                state.select(start).unwrap();
                for _ in 0..n {
                    state.cycle(CycleDirection::Forward);
                }
                assert_eq!(state.active_index(), start, "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_cycle_backward_n_times_is_identity() {
        for n in 1..=12 {
            for start in 0..n {
                let mut state = ActiveTabState::new(n).unwrap();
                state.select(start).unwrap();
                for _ in 0..n {
                    state.cycle(CycleDirection::Backward);
                }
                assert_eq!(state.active_index(), start, "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut state = ActiveTabState::new(3).unwrap();
        state.cycle(CycleDirection::Backward);
        assert_eq!(state.active_index(), 2);
        state.cycle(CycleDirection::Forward);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_cycle_keeps_drilled_in() {
        let mut state = ActiveTabState::new(4).unwrap();
        state.cycle(CycleDirection::Forward);
        assert!(state.drilled_in());

        state.select(2).unwrap();
        state.cycle(CycleDirection::Backward);
        assert_eq!(state.current(), (1, false));
    }

    #[test]
    fn test_select_always_leaves_tab_list() {
        for k in 0..9 {
            let mut state = ActiveTabState::new(9).unwrap();
            state.select(k).unwrap();
            assert_eq!(state.current(), (k, false));
        }
    }

    #[test]
    fn test_select_out_of_range_fails_without_mutation() {
        let mut state = ActiveTabState::new(9).unwrap();
        state.select(4).unwrap();

        let err = state.select(9).unwrap_err();
        assert_eq!(err, PanelError::TabOutOfRange { index: 9, len: 9 });
        assert_eq!(state.current(), (4, false));
    }
}
