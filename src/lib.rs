//! Core of the macro pad overlay: layout model, chord matching, global
//! hotkey listener, action dispatch and the overlay state machine.
//!
//! Nothing here depends on the rendering surface, so the whole core runs
//! under plain `cargo test`. The `umpb` binary adds the egui window.

pub mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod model;
pub mod platform;
pub mod storage;

// Re-export the types the binary and the tests touch most
pub use actions::{ActionDispatcher, DispatchOutcome, KeySender, Launcher};
pub use config::AppConfig;
pub use controller::{Flow, Mode, OverlayController, OverlayState};
pub use error::{DispatchError, HotkeyError, LayoutError, StorageError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use input::{ChordMatcher, ChordSpec, HotkeyListener, Key};
pub use model::{Layout, Page, Tile, TileKind};
pub use platform::{ModifierMap, Platform};
pub use storage::LayoutStore;
