//! Cross-thread hand-off from the hotkey listener to the UI thread.
//!
//! ```text
//! ┌──────────────────┐   publish()   ┌──────────┐   drain()   ┌───────────────────┐
//! │  HotkeyListener  │ ────────────▶ │ EventBus │ ──────────▶ │ OverlayController │
//! │ (listener thread)│               │  (mpsc)  │             │    (UI thread)    │
//! └──────────────────┘               └──────────┘             └───────────────────┘
//! ```
//!
//! The listener only ever holds an [`EventPublisher`]; layout and overlay
//! state stay single-writer on the UI thread.
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher, Waker};
pub use types::AppEvent;
