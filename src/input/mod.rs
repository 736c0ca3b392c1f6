//! Keyboard input: logical keys, chord matching and the global listener.
//!
//! - keys.rs: logical key identifiers and chord-string tokens
//! - chord.rs: `ChordSpec` and the held-set `ChordMatcher`
//! - native.rs: `rdev` key code translation
//! - hotkeys.rs: toggle and tile-select chords
//! - listener.rs: background `HotkeyListener`

pub mod chord;
pub mod hotkeys;
pub mod keys;
pub mod listener;
pub mod native;

pub use chord::{ChordMatcher, ChordSpec};
pub use hotkeys::{default_bindings, tile_chords, toggle_chord};
pub use keys::{Key, Modifier, NamedKey};
pub use listener::{process_event, HotkeyListener};
