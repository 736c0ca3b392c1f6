//! Application events crossing from the hotkey listener to the UI thread.
//!
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Events produced off the UI thread.
///
/// The listener thread never touches overlay or layout state; it publishes
/// one of these and the UI loop applies it to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Hotkey Events ===
    /// Toggle chord (primary + Shift + D) was pressed.
    ToggleOverlay,

    /// Tile-select chord (Alt + 1..8) was pressed; index is 0-based.
    TriggerTile(usize),

    // === Listener Lifecycle ===
    /// The OS refused or dropped the global key hook.
    ListenerFailed(String),
}
