//! Platform detection and platform-specific glue.
//!
//! The only behavioural difference the core cares about is which physical
//! modifier plays the "primary" role (Command on macOS, Control elsewhere).
//! That mapping is resolved once into a [`ModifierMap`] at startup and passed
//! around, instead of sprinkling `cfg!` checks through the matcher and the
//! dispatcher.
//!
//! Submodules:
//! - `macos`: accessibility permission check required by the global key hook
//! - `windows`: `ShellExecuteW` launch of app tiles

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

use crate::input::keys::{Key, Modifier};

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    pub fn is_macos(self) -> bool {
        self == Platform::MacOs
    }

    /// Human-readable name of the primary modifier, used in help text.
    pub fn primary_label(self) -> &'static str {
        match self {
            Platform::MacOs => "Cmd",
            Platform::Windows | Platform::Linux => "Ctrl",
        }
    }
}

/// Resolution of logical modifiers to the key identifiers the listener and
/// the input injector actually see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierMap {
    platform: Platform,
    primary: Key,
}

impl ModifierMap {
    pub fn for_platform(platform: Platform) -> Self {
        let primary = match platform {
            Platform::MacOs => Key::Meta,
            Platform::Windows | Platform::Linux => Key::Ctrl,
        };
        Self { platform, primary }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Native key standing in for the generic primary modifier.
    pub fn primary(&self) -> Key {
        self.primary
    }

    /// Map a logical modifier onto its native key.
    pub fn resolve(&self, modifier: Modifier) -> Key {
        match modifier {
            Modifier::Primary => self.primary,
            Modifier::Shift => Key::Shift,
            Modifier::Alt => Key::Alt,
            Modifier::Meta => Key::Meta,
        }
    }
}

/// Check whether the process may observe global key events, prompting the
/// user for permission where the OS requires it.
///
/// Only macOS gates global key hooks behind a user-granted permission.
pub fn ensure_input_monitoring_permission() -> bool {
    #[cfg(target_os = "macos")]
    {
        macos::ensure_accessibility_prompt()
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
