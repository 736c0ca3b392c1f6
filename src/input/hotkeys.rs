//! The global chords the macro pad listens for.
//!
//! Registers:
//! - Primary + Shift + D: toggle overlay (Cmd on macOS, Ctrl elsewhere)
//! - Alt + 1..8: trigger tile 0..7 of the current page
//! - Alt + `!@#$%^&*`: same tiles, for layouts that report the shifted symbol

use super::chord::{ChordMatcher, ChordSpec};
use super::keys::Key;
use crate::events::AppEvent;
use crate::model::constants::{PAGE_CAPACITY, SHIFTED_DIGITS, TOGGLE_KEY};
use crate::platform::ModifierMap;

/// Chord that shows or hides the overlay.
pub fn toggle_chord(modifiers: &ModifierMap) -> ChordSpec {
    ChordSpec::new([modifiers.primary(), Key::Shift, Key::Char(TOGGLE_KEY)])
}

/// Both accepted chords for the tile at `index` (digit and shifted symbol).
pub fn tile_chords(index: usize) -> [ChordSpec; 2] {
    let digit = char::from_digit(index as u32 + 1, 10).unwrap_or('0');
    let symbol = SHIFTED_DIGITS[index % SHIFTED_DIGITS.len()];
    [
        ChordSpec::new([Key::Alt, Key::Char(digit)]),
        ChordSpec::new([Key::Alt, Key::Char(symbol)]),
    ]
}

/// Matcher preloaded with the toggle chord and the eight tile chords.
pub fn default_bindings(modifiers: &ModifierMap) -> ChordMatcher<AppEvent> {
    let mut matcher = ChordMatcher::new();
    matcher.register(toggle_chord(modifiers), AppEvent::ToggleOverlay);
    for index in 0..PAGE_CAPACITY {
        for chord in tile_chords(index) {
            matcher.register(chord, AppEvent::TriggerTile(index));
        }
    }
    matcher
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn toggle_uses_command_on_macos() {
        let chord = toggle_chord(&ModifierMap::for_platform(Platform::MacOs));
        assert_eq!(chord, ChordSpec::new([Key::Meta, Key::Shift, Key::Char('d')]));
    }

    #[test]
    fn tile_chords_cover_digit_and_symbol() {
        let [digit, symbol] = tile_chords(2);
        assert_eq!(digit, ChordSpec::new([Key::Alt, Key::Char('3')]));
        assert_eq!(symbol, ChordSpec::new([Key::Alt, Key::Char('#')]));

        let [digit, symbol] = tile_chords(7);
        assert_eq!(digit, ChordSpec::new([Key::Alt, Key::Char('8')]));
        assert_eq!(symbol, ChordSpec::new([Key::Alt, Key::Char('*')]));
    }

    #[test]
    fn default_bindings_register_seventeen_chords() {
        let matcher = default_bindings(&ModifierMap::for_platform(Platform::Linux));
        assert_eq!(matcher.len(), 1 + 2 * PAGE_CAPACITY);
    }

    #[test]
    fn alt_symbol_selects_same_tile_as_digit() {
        let mut matcher = default_bindings(&ModifierMap::for_platform(Platform::Linux));
        matcher.on_key_down(Key::Alt);
        assert_eq!(
            matcher.on_key_down(Key::Char('@')),
            vec![AppEvent::TriggerTile(1)]
        );
    }
}
