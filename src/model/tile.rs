//! Tiles: the user-configured entries shown in the grid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::constants::{COLOR_APP, COLOR_SHORTCUT};
use crate::error::LayoutError;

/// What a tile does when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Sends the key chord in `key`.
    Shortcut,
    /// Opens the program or file at `path`.
    App,
}

/// A single configured action.
///
/// Serialized as `{id, name, key, action, color, type, path?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub name: String,
    /// Chord string for shortcut tiles, empty for app tiles.
    #[serde(default)]
    pub key: String,
    /// Free-form tag, only used to pick a glyph.
    #[serde(default)]
    pub action: String,
    /// Free-form style tag.
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type")]
    pub kind: TileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Tile {
    /// New shortcut tile. A blank name falls back to the chord itself.
    pub fn shortcut(name: &str, combo: &str) -> Self {
        let combo = combo.trim();
        let name = match name.trim() {
            "" => combo,
            given => given,
        };
        Self {
            id: fresh_id(),
            name: name.to_string(),
            key: combo.to_string(),
            action: name.to_lowercase(),
            color: COLOR_SHORTCUT.to_string(),
            kind: TileKind::Shortcut,
            path: None,
        }
    }

    /// New app tile named after the file stem of `path`.
    pub fn app(path: &str) -> Self {
        let path = path.trim();
        let name = Path::new(path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Self {
            id: fresh_id(),
            action: name.to_lowercase(),
            name,
            key: String::new(),
            color: COLOR_APP.to_string(),
            kind: TileKind::App,
            path: Some(path.to_string()),
        }
    }

    /// Path of an app tile, if present and non-empty.
    pub fn app_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Check the kind invariant: shortcut tiles carry a chord and no path,
    /// app tiles carry a path and no chord.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |reason: &'static str| LayoutError::InvalidTile {
            id: self.id.clone(),
            reason,
        };
        if self.id.is_empty() {
            return Err(invalid("empty id"));
        }
        match self.kind {
            TileKind::Shortcut => {
                if self.key.trim().is_empty() {
                    return Err(invalid("shortcut tile without a key chord"));
                }
                if self.app_path().is_some() {
                    return Err(invalid("shortcut tile with a path"));
                }
            }
            TileKind::App => {
                if self.app_path().is_none() {
                    return Err(invalid("app tile without a path"));
                }
                if !self.key.is_empty() {
                    return Err(invalid("app tile with a key chord"));
                }
            }
        }
        Ok(())
    }

    /// Rendering hint for the grid.
    pub fn display_hint(&self) -> DisplayHint {
        match self.kind {
            TileKind::App => DisplayHint {
                glyph: APP_GLYPH,
                caption: Some(self.name.clone()),
                tooltip: self.name.clone(),
            },
            TileKind::Shortcut => match known_glyph(&self.action) {
                Some(glyph) => DisplayHint {
                    glyph,
                    caption: None,
                    tooltip: self.name.clone(),
                },
                None => DisplayHint {
                    glyph: FALLBACK_GLYPH,
                    caption: Some(self.key.to_lowercase()),
                    tooltip: self.name.clone(),
                },
            },
        }
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

// === Display Hints ===

const APP_GLYPH: &str = "🚀";
const FALLBACK_GLYPH: &str = "🔘";

const KNOWN_GLYPHS: &[(&str, &str)] = &[
    ("undo", "↶"),
    ("redo", "↷"),
    ("copy", "⎘"),
    ("cut", "✂"),
    ("save", "💾"),
    ("find", "🔍"),
    ("new", "📄"),
    ("explorer", "📁"),
];

fn known_glyph(action: &str) -> Option<&'static str> {
    KNOWN_GLYPHS
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, glyph)| *glyph)
}

/// What the rendering surface should draw for a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayHint {
    pub glyph: &'static str,
    /// Text under the glyph; `None` for well-known shortcuts.
    pub caption: Option<String>,
    pub tooltip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_tile_defaults() {
        let tile = Tile::shortcut("", "Ctrl+Alt+K");
        assert_eq!(tile.name, "Ctrl+Alt+K");
        assert_eq!(tile.action, "ctrl+alt+k");
        assert_eq!(tile.kind, TileKind::Shortcut);
        assert_eq!(tile.color, COLOR_SHORTCUT);
        assert!(tile.path.is_none());
        assert!(tile.validate().is_ok());
    }

    #[test]
    fn app_tile_is_named_after_file_stem() {
        let tile = Tile::app("/Applications/Discord.app");
        assert_eq!(tile.name, "Discord");
        assert_eq!(tile.action, "discord");
        assert!(tile.key.is_empty());
        assert_eq!(tile.app_path(), Some("/Applications/Discord.app"));
        assert!(tile.validate().is_ok());
    }

    #[test]
    fn ids_are_never_reused() {
        let a = Tile::shortcut("a", "ctrl+a");
        let b = Tile::shortcut("a", "ctrl+a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn validate_rejects_mismatched_kind() {
        let mut tile = Tile::shortcut("Save", "ctrl+s");
        tile.path = Some("/bin/true".into());
        assert!(tile.validate().is_err());

        let mut tile = Tile::app("/bin/true");
        tile.path = None;
        assert!(tile.validate().is_err());

        let mut tile = Tile::app("/bin/true");
        tile.key = "/".into();
        assert!(tile.validate().is_err());
    }

    #[test]
    fn serializes_kind_as_type_field() {
        let tile = Tile::shortcut("Save", "ctrl+s");
        let json = serde_json::to_value(&tile).expect("serialize");
        assert_eq!(json["type"], "shortcut");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn accepts_null_path() {
        let json = r#"{"id":"7","name":"Save","key":"ctrl+s","action":"save",
                       "color":"bg-green-500","type":"shortcut","path":null}"#;
        let tile: Tile = serde_json::from_str(json).expect("deserialize");
        assert!(tile.path.is_none());
    }

    #[test]
    fn display_hint_for_known_shortcut_is_glyph_only() {
        let mut tile = Tile::shortcut("Save", "ctrl+s");
        tile.action = "save".into();
        let hint = tile.display_hint();
        assert_eq!(hint.glyph, "💾");
        assert!(hint.caption.is_none());
        assert_eq!(hint.tooltip, "Save");
    }

    #[test]
    fn display_hint_for_custom_shortcut_shows_chord() {
        let tile = Tile::shortcut("Mute", "Ctrl+Shift+M");
        assert_eq!(tile.display_hint().caption.as_deref(), Some("ctrl+shift+m"));
    }
}
