//! Process-wide keyboard listener running on its own thread.
//!
//! `rdev::listen` observes every key transition regardless of focus and never
//! swallows events, so normal typing elsewhere is unaffected. The listener
//! thread owns its [`ChordMatcher`] outright (no locks) and only talks to the
//! rest of the app through an [`EventPublisher`].
//!
//! `rdev::listen` blocks forever and offers no way to unhook, so the thread
//! lives until process exit. `stop()` mutes it instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rdev::EventType;
use tracing::{debug, error, info};

use super::chord::ChordMatcher;
use super::hotkeys::default_bindings;
use super::native::to_logical;
use crate::error::HotkeyError;
use crate::events::{AppEvent, EventPublisher};
use crate::platform::{self, ModifierMap};

/// Feed one raw OS event into the matcher, returning the events it fires.
pub fn process_event(matcher: &mut ChordMatcher<AppEvent>, event: &EventType) -> Vec<AppEvent> {
    match event {
        EventType::KeyPress(native) => match to_logical(*native) {
            Some(key) => matcher.on_key_down(key),
            None => Vec::new(),
        },
        EventType::KeyRelease(native) => {
            if let Some(key) = to_logical(*native) {
                matcher.on_key_up(&key);
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Global hotkey service with an explicit start/stop lifecycle.
pub struct HotkeyListener {
    modifiers: ModifierMap,
    active: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl HotkeyListener {
    pub fn new(modifiers: ModifierMap) -> Self {
        Self {
            modifiers,
            active: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Install the global hook on a background thread.
    ///
    /// Can only be called once per process. A hook that the OS rejects after
    /// the thread started is reported as `AppEvent::ListenerFailed`.
    pub fn start(&mut self, publisher: EventPublisher) -> Result<(), HotkeyError> {
        if self.handle.is_some() {
            return Err(HotkeyError::AlreadyRunning);
        }
        if !platform::ensure_input_monitoring_permission() {
            return Err(HotkeyError::PermissionDenied);
        }

        let mut matcher = default_bindings(&self.modifiers);
        let active = Arc::clone(&self.active);
        active.store(true, Ordering::SeqCst);

        let handle = thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || {
                let failures = publisher.clone();
                let result = rdev::listen(move |event| {
                    if !active.load(Ordering::Relaxed) {
                        return;
                    }
                    for fired in process_event(&mut matcher, &event.event_type) {
                        debug!(event = ?fired, "chord matched");
                        publisher.publish(fired);
                    }
                });
                if let Err(err) = result {
                    error!(?err, "global key listener stopped");
                    failures.publish(AppEvent::ListenerFailed(format!("{:?}", err)));
                }
            })
            .map_err(|err| {
                self.active.store(false, Ordering::SeqCst);
                HotkeyError::Spawn(err)
            })?;

        self.handle = Some(handle);
        info!(primary = %self.modifiers.primary(), "global hotkey listener started");
        Ok(())
    }

    /// Stop forwarding key events. The OS hook itself is released at exit.
    pub fn stop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            info!("global hotkey listener stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.active.load(Ordering::SeqCst)
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use rdev::Key as RKey;

    fn linux_matcher() -> ChordMatcher<AppEvent> {
        default_bindings(&ModifierMap::for_platform(Platform::Linux))
    }

    #[test]
    fn toggle_chord_from_raw_events() {
        let mut matcher = linux_matcher();
        assert!(process_event(&mut matcher, &EventType::KeyPress(RKey::ControlLeft)).is_empty());
        assert!(process_event(&mut matcher, &EventType::KeyPress(RKey::ShiftRight)).is_empty());
        assert_eq!(
            process_event(&mut matcher, &EventType::KeyPress(RKey::KeyD)),
            vec![AppEvent::ToggleOverlay]
        );
        assert!(matcher.held().is_empty());
    }

    #[test]
    fn alt_digit_selects_tile() {
        let mut matcher = linux_matcher();
        process_event(&mut matcher, &EventType::KeyPress(RKey::Alt));
        assert_eq!(
            process_event(&mut matcher, &EventType::KeyPress(RKey::Num3)),
            vec![AppEvent::TriggerTile(2)]
        );
    }

    #[test]
    fn alt_gr_symbols_do_not_select_tiles() {
        let mut matcher = linux_matcher();
        for digit in [RKey::Num7, RKey::Num8] {
            assert!(process_event(&mut matcher, &EventType::KeyPress(RKey::AltGr)).is_empty());
            assert!(process_event(&mut matcher, &EventType::KeyPress(digit)).is_empty());
            process_event(&mut matcher, &EventType::KeyRelease(digit));
            process_event(&mut matcher, &EventType::KeyRelease(RKey::AltGr));
        }
        assert!(matcher.held().is_empty());
    }

    #[test]
    fn releases_and_mouse_events_fire_nothing() {
        let mut matcher = linux_matcher();
        process_event(&mut matcher, &EventType::KeyPress(RKey::Alt));
        assert!(process_event(&mut matcher, &EventType::KeyRelease(RKey::Alt)).is_empty());
        assert!(process_event(&mut matcher, &EventType::MouseMove { x: 1.0, y: 2.0 }).is_empty());
        assert!(process_event(&mut matcher, &EventType::KeyPress(RKey::Num3)).is_empty());
    }

    #[test]
    fn plain_typing_never_fires() {
        let mut matcher = linux_matcher();
        for key in [RKey::KeyH, RKey::KeyE, RKey::KeyL, RKey::KeyL, RKey::KeyO, RKey::Num1] {
            assert!(process_event(&mut matcher, &EventType::KeyPress(key)).is_empty());
            process_event(&mut matcher, &EventType::KeyRelease(key));
        }
        assert!(matcher.held().is_empty());
    }

    #[test]
    fn new_listener_is_not_running() {
        let listener = HotkeyListener::new(ModifierMap::for_platform(Platform::Linux));
        assert!(!listener.is_running());
    }
}
