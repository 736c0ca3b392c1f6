//! Logical key identifiers shared by the chord matcher and the dispatcher.
//!
//! The listener translates native key codes into [`Key`]s, chords are sets of
//! [`Key`]s, and chord strings such as `"ctrl+shift+d"` parse into them.
//! Modifiers are sided-agnostic: left and right Control are both `Key::Ctrl`.

use std::fmt;

use crate::platform::ModifierMap;

/// A logical key as seen by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Ctrl,
    Shift,
    Alt,
    /// Command on macOS, Windows/Super elsewhere.
    Meta,
    /// A printable key, always lowercase for letters.
    Char(char),
    Named(NamedKey),
    /// Native code with no logical mapping.
    Other(u32),
}

impl Key {
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Ctrl | Key::Shift | Key::Alt | Key::Meta)
    }

    /// Build a `Char` key, folding letters to lowercase.
    pub fn from_char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }

    /// Parse one `+`-separated token of a chord string.
    ///
    /// Generic modifier spellings (`ctrl`, `control`, `primary`, `mod`) resolve
    /// to the platform's primary modifier. Explicit native spellings
    /// (`cmd`, `meta`, `super`, `win`) are kept as typed.
    pub fn from_token(token: &str, modifiers: &ModifierMap) -> Option<Key> {
        let token = token.trim().to_lowercase();
        if let Some(modifier) = Modifier::from_token(&token) {
            return Some(modifiers.resolve(modifier));
        }
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::from_char(c));
        }
        NamedKey::from_token(&token).map(Key::Named)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Ctrl => f.write_str("ctrl"),
            Key::Shift => f.write_str("shift"),
            Key::Alt => f.write_str("alt"),
            Key::Meta => f.write_str("meta"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Named(named) => f.write_str(named.name()),
            Key::Other(code) => write!(f, "<{}>", code),
        }
    }
}

/// Modifier as written in a chord string, before platform resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// The platform-conventional main modifier.
    Primary,
    Shift,
    Alt,
    /// The platform-native command/super key, named explicitly.
    Meta,
}

impl Modifier {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" | "primary" | "mod" => Some(Modifier::Primary),
            "shift" => Some(Modifier::Shift),
            "alt" | "option" | "opt" => Some(Modifier::Alt),
            "cmd" | "command" | "meta" | "super" | "win" => Some(Modifier::Meta),
            _ => None,
        }
    }
}

/// Non-printable keys that can appear in a chord string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
    Enter,
    Tab,
    Escape,
    Space,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function keys F1 to F12.
    F(u8),
}

impl NamedKey {
    pub fn from_token(token: &str) -> Option<Self> {
        let named = match token {
            "enter" | "return" => NamedKey::Enter,
            "tab" => NamedKey::Tab,
            "esc" | "escape" => NamedKey::Escape,
            "space" => NamedKey::Space,
            "backspace" => NamedKey::Backspace,
            "del" | "delete" => NamedKey::Delete,
            "up" => NamedKey::Up,
            "down" => NamedKey::Down,
            "left" => NamedKey::Left,
            "right" => NamedKey::Right,
            "home" => NamedKey::Home,
            "end" => NamedKey::End,
            "pageup" | "pgup" => NamedKey::PageUp,
            "pagedown" | "pgdown" => NamedKey::PageDown,
            _ => {
                let n: u8 = token.strip_prefix('f')?.parse().ok()?;
                if (1..=12).contains(&n) {
                    NamedKey::F(n)
                } else {
                    return None;
                }
            }
        };
        Some(named)
    }

    pub fn name(&self) -> &'static str {
        const F_NAMES: [&str; 12] = [
            "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
        ];
        match self {
            NamedKey::Enter => "enter",
            NamedKey::Tab => "tab",
            NamedKey::Escape => "esc",
            NamedKey::Space => "space",
            NamedKey::Backspace => "backspace",
            NamedKey::Delete => "delete",
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "pageup",
            NamedKey::PageDown => "pagedown",
            NamedKey::F(n) => F_NAMES
                .get(usize::from(n.saturating_sub(1)))
                .copied()
                .unwrap_or("f?"),
        }
    }
}
