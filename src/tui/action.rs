use crossterm::event::KeyEvent;

use crate::panel::CycleDirection;

/// Global actions
///
/// All state changes in the host go through an action. They come from key
/// events and from the results of async effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Click tab `n` of the tab strip
    SelectTab(usize),

    /// Tab / Shift-Tab, forwarded to the panel's key channel
    CycleKey(KeyEvent),

    /// Click the host back control
    Back,

    /// A command viewer asks for the hiding view at a section
    OpenHider(usize),

    /// Move focus between General toggles
    FocusSetting(CycleDirection),

    /// Flip the focused General toggle
    ToggleFocusedSetting,

    /// Move between hiding-view sections
    HiderSection(CycleDirection),

    /// Post a notice on the host's status line
    SetNotice { message: String, is_error: bool },

    /// Drain queued panel signals (timer deliveries)
    Pump,

    /// Close the settings surface
    Quit,
}
