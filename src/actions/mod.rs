//! Tile actions: chord strings to synthetic input, paths to launched apps.

pub mod combo;
pub mod dispatcher;

pub use combo::{parse_combo, KeyCombo};
pub use dispatcher::{
    ActionDispatcher, DispatchOutcome, KeySender, Launcher, RdevKeySender, SystemLauncher,
};
