use thiserror::Error;

/// Errors raised by the navigation core
///
/// All of these are caller bugs rather than runtime conditions: the panel
/// controls every index it hands out, so an out-of-range index means a
/// broken call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Tab index {index} out of range for {len} tabs")]
    TabOutOfRange { index: usize, len: usize },

    #[error("Tab registry must contain at least one tab")]
    EmptyRegistry,
}

/// Result type for navigation core operations
pub type PanelResult<T> = Result<T, PanelError>;
