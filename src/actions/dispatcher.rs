//! Turning a tile into OS side effects.
//!
//! Shortcut tiles become synthetic key presses, app tiles become detached
//! processes. Both OS surfaces sit behind small traits so the dispatch
//! sequence can be checked without touching the real keyboard.

use std::thread;
use std::time::Duration;

use rdev::EventType;
use tracing::{debug, info, warn};

use super::combo::{parse_combo, KeyCombo};
use crate::error::DispatchError;
use crate::input::native::to_native;
use crate::input::Key;
use crate::model::{Tile, TileKind};
use crate::platform::ModifierMap;

/// Delay between synthetic events; some platforms drop events sent back to back.
const INJECT_DELAY: Duration = Duration::from_millis(20);

/// Sink for synthetic key transitions.
pub trait KeySender {
    fn press(&mut self, key: Key) -> Result<(), DispatchError>;
    fn release(&mut self, key: Key) -> Result<(), DispatchError>;
}

/// Starts an external program or document.
pub trait Launcher {
    fn open(&mut self, path: &str) -> Result<(), DispatchError>;
}

/// Injects keys through `rdev::simulate`.
#[derive(Debug, Default)]
pub struct RdevKeySender;

impl RdevKeySender {
    fn send(&self, key: Key, event: fn(rdev::Key) -> EventType) -> Result<(), DispatchError> {
        let native = to_native(key).ok_or_else(|| DispatchError::UnsupportedKey(key.to_string()))?;
        rdev::simulate(&event(native))
            .map_err(|err| DispatchError::InputInjection(format!("{} ({:?})", key, err)))?;
        thread::sleep(INJECT_DELAY);
        Ok(())
    }
}

impl KeySender for RdevKeySender {
    fn press(&mut self, key: Key) -> Result<(), DispatchError> {
        self.send(key, EventType::KeyPress)
    }

    fn release(&mut self, key: Key) -> Result<(), DispatchError> {
        self.send(key, EventType::KeyRelease)
    }
}

/// Opens paths with the platform's native "open" mechanism.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    #[cfg(target_os = "windows")]
    fn open(&mut self, path: &str) -> Result<(), DispatchError> {
        crate::platform::windows::shell_open(path).map_err(|reason| DispatchError::ProcessLaunch {
            path: path.to_string(),
            reason,
        })
    }

    #[cfg(not(target_os = "windows"))]
    fn open(&mut self, path: &str) -> Result<(), DispatchError> {
        use std::process::{Command, Stdio};

        let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
        let mut child = Command::new(opener)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| DispatchError::ProcessLaunch {
                path: path.to_string(),
                reason: err.to_string(),
            })?;

        // Reap the opener so it does not linger as a zombie.
        let path = path.to_string();
        let reaper = thread::Builder::new()
            .name("launch-reaper".into())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    warn!(path = %path, %status, "opener exited with failure");
                }
                Ok(_) => {}
                Err(err) => warn!(path = %path, error = %err, "failed to wait for opener"),
            });
        if let Err(err) = reaper {
            debug!(error = %err, "could not spawn reaper thread");
        }
        Ok(())
    }
}

/// What a dispatch attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Edit mode: nothing was sent.
    Skipped,
    KeysSent(KeyCombo),
    Launched(String),
    /// The error has already been logged.
    Failed(DispatchError),
}

/// Executes tiles against a [`KeySender`] and a [`Launcher`].
pub struct ActionDispatcher {
    modifiers: ModifierMap,
    keys: Box<dyn KeySender>,
    launcher: Box<dyn Launcher>,
}

impl ActionDispatcher {
    pub fn new(
        modifiers: ModifierMap,
        keys: Box<dyn KeySender>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        Self {
            modifiers,
            keys,
            launcher,
        }
    }

    /// Dispatcher wired to the real keyboard and process launcher.
    pub fn system(modifiers: ModifierMap) -> Self {
        Self::new(
            modifiers,
            Box::new(RdevKeySender),
            Box::new(SystemLauncher),
        )
    }

    pub fn modifiers(&self) -> &ModifierMap {
        &self.modifiers
    }

    /// Trigger `tile`. Never fails: errors are logged and reported in the
    /// outcome. Does nothing in edit mode.
    pub fn dispatch(&mut self, tile: &Tile, edit_mode: bool) -> DispatchOutcome {
        if edit_mode {
            debug!(id = %tile.id, "edit mode, tile not dispatched");
            return DispatchOutcome::Skipped;
        }

        let result = match tile.kind {
            TileKind::Shortcut => self.send_shortcut(&tile.key).map(DispatchOutcome::KeysSent),
            TileKind::App => self.launch(tile).map(DispatchOutcome::Launched),
        };

        match result {
            Ok(outcome) => {
                info!(id = %tile.id, name = %tile.name, "tile dispatched");
                outcome
            }
            Err(err) => {
                warn!(id = %tile.id, name = %tile.name, error = %err, "tile dispatch failed");
                DispatchOutcome::Failed(err)
            }
        }
    }

    fn send_shortcut(&mut self, chord: &str) -> Result<KeyCombo, DispatchError> {
        let combo = parse_combo(chord, &self.modifiers)?;
        debug!(chord = %combo, "sending shortcut");

        let mut pressed = Vec::with_capacity(combo.modifiers.len());
        let result = self.press_sequence(&combo, &mut pressed);

        // Release whatever went down, even on failure, so no modifier sticks.
        for key in pressed.into_iter().rev() {
            if let Err(err) = self.keys.release(key) {
                warn!(%key, error = %err, "failed to release modifier");
            }
        }
        result.map(|()| combo)
    }

    fn press_sequence(
        &mut self,
        combo: &KeyCombo,
        pressed: &mut Vec<Key>,
    ) -> Result<(), DispatchError> {
        for &modifier in &combo.modifiers {
            self.keys.press(modifier)?;
            pressed.push(modifier);
        }
        if let Some(key) = combo.key {
            self.keys.press(key)?;
            self.keys.release(key)?;
        }
        Ok(())
    }

    fn launch(&mut self, tile: &Tile) -> Result<String, DispatchError> {
        let path = tile
            .app_path()
            .ok_or_else(|| DispatchError::MissingPath(tile.id.clone()))?;
        debug!(path, "launching app");
        self.launcher.open(path)?;
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Press(Key),
        Release(Key),
        Open(String),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeKeys {
        log: Log,
        fail_on: Option<Key>,
    }

    impl KeySender for FakeKeys {
        fn press(&mut self, key: Key) -> Result<(), DispatchError> {
            if self.fail_on == Some(key) {
                return Err(DispatchError::InputInjection("denied".into()));
            }
            self.log.borrow_mut().push(Call::Press(key));
            Ok(())
        }

        fn release(&mut self, key: Key) -> Result<(), DispatchError> {
            self.log.borrow_mut().push(Call::Release(key));
            Ok(())
        }
    }

    struct FakeLauncher(Log);

    impl Launcher for FakeLauncher {
        fn open(&mut self, path: &str) -> Result<(), DispatchError> {
            self.0.borrow_mut().push(Call::Open(path.to_string()));
            Ok(())
        }
    }

    fn dispatcher(platform: Platform, fail_on: Option<Key>) -> (ActionDispatcher, Log) {
        let log: Log = Rc::default();
        let dispatcher = ActionDispatcher::new(
            ModifierMap::for_platform(platform),
            Box::new(FakeKeys {
                log: Rc::clone(&log),
                fail_on,
            }),
            Box::new(FakeLauncher(Rc::clone(&log))),
        );
        (dispatcher, log)
    }

    #[test]
    fn shortcut_presses_then_releases_in_reverse() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, None);
        let outcome = dispatcher.dispatch(&Tile::shortcut("Redo", "ctrl+shift+z"), false);
        assert!(matches!(outcome, DispatchOutcome::KeysSent(_)));
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Press(Key::Ctrl),
                Call::Press(Key::Shift),
                Call::Press(Key::Char('z')),
                Call::Release(Key::Char('z')),
                Call::Release(Key::Shift),
                Call::Release(Key::Ctrl),
            ]
        );
    }

    #[test]
    fn primary_modifier_is_command_on_macos() {
        let (mut dispatcher, log) = dispatcher(Platform::MacOs, None);
        dispatcher.dispatch(&Tile::shortcut("Save", "ctrl+s"), false);
        assert_eq!(log.borrow()[0], Call::Press(Key::Meta));
    }

    #[test]
    fn edit_mode_is_a_noop() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, None);
        assert_eq!(
            dispatcher.dispatch(&Tile::shortcut("Save", "ctrl+s"), true),
            DispatchOutcome::Skipped
        );
        assert_eq!(
            dispatcher.dispatch(&Tile::app("/usr/bin/gimp"), true),
            DispatchOutcome::Skipped
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn failed_press_releases_held_modifiers() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, Some(Key::Char('s')));
        let outcome = dispatcher.dispatch(&Tile::shortcut("Save", "ctrl+alt+s"), false);
        assert!(matches!(
            outcome,
            DispatchOutcome::Failed(DispatchError::InputInjection(_))
        ));
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Press(Key::Ctrl),
                Call::Press(Key::Alt),
                Call::Release(Key::Alt),
                Call::Release(Key::Ctrl),
            ]
        );
    }

    #[test]
    fn unparseable_chord_injects_nothing() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, None);
        let outcome = dispatcher.dispatch(&Tile::shortcut("Bad", "ctrl+a+b"), false);
        assert!(matches!(
            outcome,
            DispatchOutcome::Failed(DispatchError::TooManyKeys(_))
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn app_tile_opens_path() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, None);
        let outcome = dispatcher.dispatch(&Tile::app("/usr/bin/discord"), false);
        assert_eq!(outcome, DispatchOutcome::Launched("/usr/bin/discord".into()));
        assert_eq!(*log.borrow(), vec![Call::Open("/usr/bin/discord".into())]);
    }

    #[test]
    fn app_tile_without_path_fails() {
        let (mut dispatcher, log) = dispatcher(Platform::Linux, None);
        let mut tile = Tile::app("/usr/bin/discord");
        tile.path = None;
        assert!(matches!(
            dispatcher.dispatch(&tile, false),
            DispatchOutcome::Failed(DispatchError::MissingPath(_))
        ));
        assert!(log.borrow().is_empty());
    }
}
