//! Error types for the macro pad core.
//!
//! Only `HotkeyError` at startup is ever surfaced to the user. Everything
//! else is recovered locally and logged by the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Structural violations of the paged tile layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has no pages")]
    EmptyLayout,

    #[error("page {page} already holds {capacity} tiles")]
    CapacityExceeded { page: usize, capacity: usize },

    #[error("layout already has the maximum of {max} pages")]
    PageLimitExceeded { max: usize },

    #[error("page {index} does not exist (layout has {len})")]
    PageOutOfRange { index: usize, len: usize },

    #[error("invalid tile `{id}`: {reason}")]
    InvalidTile { id: String, reason: &'static str },
}

/// Failures reading or writing the persisted layout file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read layout {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse layout {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("layout {} is malformed: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: LayoutError,
    },

    #[error("failed to write layout {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    /// True for the load-side variants (corrupt or unreadable file).
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            StorageError::Read { .. } | StorageError::Parse { .. } | StorageError::Invalid { .. }
        )
    }
}

/// Failures while triggering a tile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("key chord is empty")]
    EmptyChord,

    #[error("unknown key token `{0}`")]
    UnknownToken(String),

    #[error("chord `{0}` names more than one non-modifier key")]
    TooManyKeys(String),

    #[error("key {0} cannot be synthesized on this platform")]
    UnsupportedKey(String),

    #[error("failed to inject input: {0}")]
    InputInjection(String),

    #[error("failed to launch `{path}`: {reason}")]
    ProcessLaunch { path: String, reason: String },

    #[error("app tile `{0}` has no path")]
    MissingPath(String),
}

/// Failures installing the global keyboard listener.
#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("hotkey listener already running")]
    AlreadyRunning,

    #[error("failed to spawn hotkey listener thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("accessibility permission is required to observe global key presses")]
    PermissionDenied,
}
