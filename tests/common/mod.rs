//! Shared fakes for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use umpb::{ActionDispatcher, DispatchError, Key, KeySender, Launcher, ModifierMap, Platform};

/// One observable OS side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Press(Key),
    Release(Key),
    Open(String),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct RecordingKeys {
    log: CallLog,
    refuse: bool,
}

impl KeySender for RecordingKeys {
    fn press(&mut self, key: Key) -> Result<(), DispatchError> {
        if self.refuse {
            return Err(DispatchError::InputInjection("not permitted".into()));
        }
        self.log.borrow_mut().push(Call::Press(key));
        Ok(())
    }

    fn release(&mut self, key: Key) -> Result<(), DispatchError> {
        self.log.borrow_mut().push(Call::Release(key));
        Ok(())
    }
}

pub struct RecordingLauncher {
    log: CallLog,
}

impl Launcher for RecordingLauncher {
    fn open(&mut self, path: &str) -> Result<(), DispatchError> {
        if !Path::new(path).is_absolute() {
            return Err(DispatchError::ProcessLaunch {
                path: path.to_string(),
                reason: "not found".into(),
            });
        }
        self.log.borrow_mut().push(Call::Open(path.to_string()));
        Ok(())
    }
}

/// Dispatcher recording every side effect into the returned log.
pub fn recording_dispatcher(platform: Platform) -> (ActionDispatcher, CallLog) {
    dispatcher_with(platform, false)
}

/// Dispatcher whose key injection is always refused.
pub fn refusing_dispatcher(platform: Platform) -> (ActionDispatcher, CallLog) {
    dispatcher_with(platform, true)
}

fn dispatcher_with(platform: Platform, refuse: bool) -> (ActionDispatcher, CallLog) {
    umpb::logging::init_test();
    let log = CallLog::default();
    let dispatcher = ActionDispatcher::new(
        ModifierMap::for_platform(platform),
        Box::new(RecordingKeys {
            log: Rc::clone(&log),
            refuse,
        }),
        Box::new(RecordingLauncher {
            log: Rc::clone(&log),
        }),
    );
    (dispatcher, log)
}

/// Ids of the tiles on `page`, in order.
pub fn ids(page: &umpb::Page) -> Vec<String> {
    page.tiles().iter().map(|tile| tile.id.clone()).collect()
}
