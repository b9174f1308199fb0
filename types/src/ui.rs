//! UI state types shared by the engine and the terminal front end.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Keep the dragged card in the hand instead of following the pointer.
    pub reduced_motion: bool,
}
