//! Chord matching over the set of currently held keys.
//!
//! Matching is by set containment, so press order inside a chord does not
//! matter. On any match the whole held set is cleared: a chord fires once
//! per press burst and keys still physically down after a match are
//! forgotten until they are pressed again.

use std::collections::BTreeSet;
use std::fmt;

use super::keys::Key;
use crate::platform::ModifierMap;

/// An immutable set of keys that must be held together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSpec {
    keys: BTreeSet<Key>,
}

impl ChordSpec {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Parse a `+`-separated chord string such as `"ctrl+shift+d"`.
    ///
    /// Returns `None` when any token is unknown or the string is empty.
    pub fn parse(chord: &str, modifiers: &ModifierMap) -> Option<Self> {
        let keys = chord
            .split('+')
            .map(|token| Key::from_token(token, modifiers))
            .collect::<Option<BTreeSet<_>>>()?;
        if keys.is_empty() {
            return None;
        }
        Some(Self { keys })
    }

    pub fn keys(&self) -> &BTreeSet<Key> {
        &self.keys
    }

    pub fn is_satisfied_by(&self, held: &BTreeSet<Key>) -> bool {
        !self.keys.is_empty() && self.keys.is_subset(held)
    }
}

impl fmt::Display for ChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in &self.keys {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{}", key)?;
            first = false;
        }
        Ok(())
    }
}

/// A chord bound to the action it fires.
#[derive(Debug, Clone)]
struct Binding<A> {
    chord: ChordSpec,
    action: A,
}

/// Tracks held keys and reports which registered chords a key press
/// completes.
///
/// Not synchronised: feed it from a single thread (the listener thread owns
/// its matcher).
#[derive(Debug, Clone)]
pub struct ChordMatcher<A> {
    held: BTreeSet<Key>,
    bindings: Vec<Binding<A>>,
}

impl<A: Clone> ChordMatcher<A> {
    pub fn new() -> Self {
        Self {
            held: BTreeSet::new(),
            bindings: Vec::new(),
        }
    }

    /// Bind `action` to `chord`. Registration order is firing order.
    pub fn register(&mut self, chord: ChordSpec, action: A) {
        self.bindings.push(Binding { chord, action });
    }

    /// Record a key press and return the actions of every chord it
    /// completes, in registration order.
    pub fn on_key_down(&mut self, key: Key) -> Vec<A> {
        self.held.insert(key);

        let fired: Vec<A> = self
            .bindings
            .iter()
            .filter(|binding| binding.chord.is_satisfied_by(&self.held))
            .map(|binding| binding.action.clone())
            .collect();

        if !fired.is_empty() {
            self.held.clear();
        }
        fired
    }

    /// Record a key release. Keys not in the held set are ignored.
    pub fn on_key_up(&mut self, key: &Key) {
        self.held.remove(key);
    }

    pub fn held(&self) -> &BTreeSet<Key> {
        &self.held
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A: Clone> Default for ChordMatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}
