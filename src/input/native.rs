//! Translation between `rdev` key codes and logical [`Key`]s.
//!
//! Translation is by physical key position, so a press and its release map to
//! the same logical key whatever modifiers are down. Printable keys use their
//! unshifted US-layout character.

use rdev::Key as RKey;

use super::keys::{Key, NamedKey};

const CHAR_KEYS: &[(char, RKey)] = &[
    ('a', RKey::KeyA),
    ('b', RKey::KeyB),
    ('c', RKey::KeyC),
    ('d', RKey::KeyD),
    ('e', RKey::KeyE),
    ('f', RKey::KeyF),
    ('g', RKey::KeyG),
    ('h', RKey::KeyH),
    ('i', RKey::KeyI),
    ('j', RKey::KeyJ),
    ('k', RKey::KeyK),
    ('l', RKey::KeyL),
    ('m', RKey::KeyM),
    ('n', RKey::KeyN),
    ('o', RKey::KeyO),
    ('p', RKey::KeyP),
    ('q', RKey::KeyQ),
    ('r', RKey::KeyR),
    ('s', RKey::KeyS),
    ('t', RKey::KeyT),
    ('u', RKey::KeyU),
    ('v', RKey::KeyV),
    ('w', RKey::KeyW),
    ('x', RKey::KeyX),
    ('y', RKey::KeyY),
    ('z', RKey::KeyZ),
    ('0', RKey::Num0),
    ('1', RKey::Num1),
    ('2', RKey::Num2),
    ('3', RKey::Num3),
    ('4', RKey::Num4),
    ('5', RKey::Num5),
    ('6', RKey::Num6),
    ('7', RKey::Num7),
    ('8', RKey::Num8),
    ('9', RKey::Num9),
    ('`', RKey::BackQuote),
    ('-', RKey::Minus),
    ('=', RKey::Equal),
    ('[', RKey::LeftBracket),
    (']', RKey::RightBracket),
    (';', RKey::SemiColon),
    ('\'', RKey::Quote),
    ('\\', RKey::BackSlash),
    (',', RKey::Comma),
    ('.', RKey::Dot),
    ('/', RKey::Slash),
];

const NAMED_KEYS: &[(NamedKey, RKey)] = &[
    (NamedKey::Enter, RKey::Return),
    (NamedKey::Tab, RKey::Tab),
    (NamedKey::Escape, RKey::Escape),
    (NamedKey::Space, RKey::Space),
    (NamedKey::Backspace, RKey::Backspace),
    (NamedKey::Delete, RKey::Delete),
    (NamedKey::Up, RKey::UpArrow),
    (NamedKey::Down, RKey::DownArrow),
    (NamedKey::Left, RKey::LeftArrow),
    (NamedKey::Right, RKey::RightArrow),
    (NamedKey::Home, RKey::Home),
    (NamedKey::End, RKey::End),
    (NamedKey::PageUp, RKey::PageUp),
    (NamedKey::PageDown, RKey::PageDown),
    (NamedKey::F(1), RKey::F1),
    (NamedKey::F(2), RKey::F2),
    (NamedKey::F(3), RKey::F3),
    (NamedKey::F(4), RKey::F4),
    (NamedKey::F(5), RKey::F5),
    (NamedKey::F(6), RKey::F6),
    (NamedKey::F(7), RKey::F7),
    (NamedKey::F(8), RKey::F8),
    (NamedKey::F(9), RKey::F9),
    (NamedKey::F(10), RKey::F10),
    (NamedKey::F(11), RKey::F11),
    (NamedKey::F(12), RKey::F12),
];

/// Map a native key to its logical identifier.
///
/// Keys that can never be part of a chord (lock keys, keypad) map to `None`.
/// So does AltGr: it is a character shift on many layouts (AltGr+7 is `{`
/// on German keyboards) and must never satisfy an Alt chord.
pub fn to_logical(key: RKey) -> Option<Key> {
    let logical = match key {
        RKey::ControlLeft | RKey::ControlRight => Key::Ctrl,
        RKey::ShiftLeft | RKey::ShiftRight => Key::Shift,
        RKey::Alt => Key::Alt,
        RKey::AltGr => return None,
        RKey::MetaLeft | RKey::MetaRight => Key::Meta,
        RKey::Unknown(code) => Key::Other(code),
        other => {
            if let Some((c, _)) = CHAR_KEYS.iter().find(|(_, native)| *native == other) {
                Key::Char(*c)
            } else if let Some((named, _)) =
                NAMED_KEYS.iter().find(|(_, native)| *native == other)
            {
                Key::Named(*named)
            } else {
                return None;
            }
        }
    };
    Some(logical)
}

/// Map a logical key to the native key used for synthetic input.
pub fn to_native(key: Key) -> Option<RKey> {
    match key {
        Key::Ctrl => Some(RKey::ControlLeft),
        Key::Shift => Some(RKey::ShiftLeft),
        Key::Alt => Some(RKey::Alt),
        Key::Meta => Some(RKey::MetaLeft),
        Key::Char(c) => CHAR_KEYS
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, native)| *native),
        Key::Named(named) => NAMED_KEYS
            .iter()
            .find(|(n, _)| *n == named)
            .map(|(_, native)| *native),
        Key::Other(code) => Some(RKey::Unknown(code)),
    }
}
