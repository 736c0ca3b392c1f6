//! Parsing of a tile's chord string into an ordered key sequence.
//!
//! Unlike [`ChordSpec`](crate::input::ChordSpec), which is an unordered set
//! used for matching, a `KeyCombo` keeps modifiers in the order they were
//! typed so they can be pressed and released symmetrically.

use std::fmt;

use crate::error::DispatchError;
use crate::input::Key;
use crate::platform::ModifierMap;

/// Modifiers in typed order plus at most one non-modifier key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Vec<Key>,
    pub key: Option<Key>,
}

impl KeyCombo {
    /// Keys in press order.
    pub fn press_order(&self) -> impl Iterator<Item = Key> + '_ {
        self.modifiers.iter().copied().chain(self.key)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in self.press_order() {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{}", key)?;
            first = false;
        }
        Ok(())
    }
}

/// Parse `"ctrl+shift+s"` style strings.
///
/// The generic primary modifier resolves through `modifiers`, so `ctrl+s`
/// sends Command+S on macOS while `meta+s` is sent as typed everywhere.
/// Repeated modifiers are pressed once.
pub fn parse_combo(combo: &str, modifiers: &ModifierMap) -> Result<KeyCombo, DispatchError> {
    let combo = combo.trim();
    if combo.is_empty() {
        return Err(DispatchError::EmptyChord);
    }

    let mut parsed = KeyCombo {
        modifiers: Vec::new(),
        key: None,
    };
    for token in combo.split('+').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let key = Key::from_token(token, modifiers)
            .ok_or_else(|| DispatchError::UnknownToken(token.to_string()))?;
        if key.is_modifier() {
            if !parsed.modifiers.contains(&key) {
                parsed.modifiers.push(key);
            }
        } else if parsed.key.replace(key).is_some() {
            return Err(DispatchError::TooManyKeys(combo.to_string()));
        }
    }

    if parsed.modifiers.is_empty() && parsed.key.is_none() {
        return Err(DispatchError::EmptyChord);
    }
    Ok(parsed)
}
