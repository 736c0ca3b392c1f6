//! Overlay state machine.
//!
//! Owns the [`LayoutStore`] and the [`ActionDispatcher`] and is driven from
//! the UI thread only: by widget callbacks directly, and by hotkey events
//! after they have crossed the event bus.

use tracing::{debug, error, info, warn};

use crate::actions::{ActionDispatcher, DispatchOutcome};
use crate::error::LayoutError;
use crate::events::AppEvent;
use crate::model::{Page, Tile};
use crate::platform::ModifierMap;
use crate::storage::LayoutStore;

/// Observable overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    VisibleNormal,
    VisibleEdit,
}

/// Whether tiles fire or can be edited. Kept across hide/show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Edit,
}

/// Tells the UI loop whether to keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct OverlayController {
    store: LayoutStore,
    dispatcher: ActionDispatcher,
    visible: bool,
    mode: Mode,
    minimized: bool,
    notice: Option<String>,
}

impl OverlayController {
    pub fn new(store: LayoutStore, dispatcher: ActionDispatcher, visible: bool) -> Self {
        Self {
            store,
            dispatcher,
            visible,
            mode: Mode::Normal,
            minimized: false,
            notice: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        match (self.visible, self.mode) {
            (false, _) => OverlayState::Hidden,
            (true, Mode::Normal) => OverlayState::VisibleNormal,
            (true, Mode::Edit) => OverlayState::VisibleEdit,
        }
    }

    // === Events from the hotkey listener ===

    /// Apply an event drained from the bus.
    pub fn handle_event(&mut self, event: AppEvent) {
        debug!(?event, "handling event");
        match event {
            AppEvent::ToggleOverlay => self.toggle_requested(),
            AppEvent::TriggerTile(index) => {
                self.tile_requested(index);
            }
            AppEvent::ListenerFailed(reason) => self.report_listener_failure(&reason),
        }
    }

    /// Flip visibility, keeping the current mode.
    pub fn toggle_requested(&mut self) {
        self.visible = !self.visible;
        info!(visible = self.visible, "overlay toggled");
    }

    /// Trigger tile `index` of the current page from a hotkey.
    ///
    /// Ignored while hidden, in edit mode, or when the page has no such tile.
    pub fn tile_requested(&mut self, index: usize) -> Option<DispatchOutcome> {
        if self.state() != OverlayState::VisibleNormal {
            debug!(index, state = ?self.state(), "tile hotkey ignored");
            return None;
        }
        self.dispatch_current(index)
    }

    /// Trigger tile `index` of the current page from a click.
    ///
    /// In edit mode the dispatcher skips it.
    pub fn tile_clicked(&mut self, index: usize) -> Option<DispatchOutcome> {
        if !self.visible {
            return None;
        }
        self.dispatch_current(index)
    }

    fn dispatch_current(&mut self, index: usize) -> Option<DispatchOutcome> {
        let Some(tile) = self.store.current_tile(index) else {
            debug!(
                index,
                page = self.store.current_page_index(),
                "no tile at index"
            );
            return None;
        };
        let edit_mode = self.is_edit_mode();
        Some(self.dispatcher.dispatch(tile, edit_mode))
    }

    // === Header buttons ===

    /// Toggle between normal and edit mode.
    pub fn settings_pressed(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Edit,
            Mode::Edit => Mode::Normal,
        };
        debug!(mode = ?self.mode, "mode changed");
    }

    /// Back to the first page, leaving edit mode.
    pub fn home_pressed(&mut self) {
        if let Err(err) = self.store.go_to_page(0) {
            warn!(error = %err, "failed to go to first page");
        }
        self.mode = Mode::Normal;
    }

    /// Save the layout and ask the UI loop to exit.
    pub fn power_pressed(&mut self) -> Flow {
        info!("power pressed, shutting down");
        self.shutdown();
        Flow::Quit
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    // === Pages ===

    pub fn page_dot_clicked(&mut self, index: usize) {
        if let Err(err) = self.store.go_to_page(index) {
            debug!(error = %err, "page navigation ignored");
        }
    }

    /// Append a page and navigate to it.
    pub fn add_page_clicked(&mut self) -> Result<usize, LayoutError> {
        let index = self.store.add_page().inspect_err(|err| {
            debug!(error = %err, "add page rejected");
        })?;
        self.store.go_to_page(index)?;
        info!(page = index, "page added");
        Ok(index)
    }

    // === Tiles ===

    /// Append `tile` to the current page.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), LayoutError> {
        let page = self.store.current_page_index();
        let id = tile.id.clone();
        self.store.add_tile(page, tile).inspect_err(|err| {
            debug!(error = %err, "add tile rejected");
        })?;
        info!(page, id = %id, "tile added");
        Ok(())
    }

    /// Remove a tile from the current page by id.
    pub fn delete_tile(&mut self, tile_id: &str) {
        let page = self.store.current_page_index();
        self.store.delete_tile(page, tile_id);
    }

    // === Lifecycle ===

    /// Final save before the process exits.
    pub fn shutdown(&mut self) {
        self.store.persist();
    }

    /// Record a fatal listener failure. Only the first one is kept.
    pub fn report_listener_failure(&mut self, reason: &str) {
        error!(reason, "global hotkeys unavailable");
        if self.notice.is_none() {
            self.notice = Some(format!("Global hotkeys unavailable: {}", reason));
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // === Rendering accessors ===

    pub fn pages(&self) -> &[Page] {
        self.store.pages()
    }

    pub fn current_page_index(&self) -> usize {
        self.store.current_page_index()
    }

    pub fn current_page(&self) -> &Page {
        self.store.current_page()
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn modifiers(&self) -> &ModifierMap {
        self.dispatcher.modifiers()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == Mode::Edit
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn can_add_page(&self) -> bool {
        self.store.layout().can_add_page()
    }

    /// Help line under the grid; a pending notice wins.
    pub fn info_text(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if self.is_edit_mode() {
            "Tap ➕ to add • ✕ to delete • New pages with ➕ circle".to_string()
        } else {
            let primary = self.modifiers().platform().primary_label();
            format!("Press {}+Shift+D to toggle • Settings = Edit mode", primary)
        }
    }

    /// `Page i/n`, only when there is more than one page.
    pub fn page_label(&self) -> Option<String> {
        let count = self.pages().len();
        (count > 1).then(|| format!("Page {}/{}", self.current_page_index() + 1, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{KeySender, Launcher};
    use crate::error::DispatchError;
    use crate::input::Key;
    use crate::model::Layout;
    use crate::platform::Platform;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct CountingKeys(Rc<Cell<usize>>);

    impl KeySender for CountingKeys {
        fn press(&mut self, _key: Key) -> Result<(), DispatchError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }

        fn release(&mut self, _key: Key) -> Result<(), DispatchError> {
            Ok(())
        }
    }

    struct CountingLauncher(Rc<Cell<usize>>);

    impl Launcher for CountingLauncher {
        fn open(&mut self, _path: &str) -> Result<(), DispatchError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    /// The returned directory holds the layout file; keep it alive for the test.
    fn controller(visible: bool) -> (OverlayController, Rc<Cell<usize>>, TempDir) {
        let calls = Rc::new(Cell::new(0));
        let platform = Platform::Linux;
        let dir = TempDir::new().unwrap();
        let store = LayoutStore::with_layout(
            dir.path().join("layout.json"),
            Layout::builtin(platform),
        );
        let dispatcher = ActionDispatcher::new(
            ModifierMap::for_platform(platform),
            Box::new(CountingKeys(Rc::clone(&calls))),
            Box::new(CountingLauncher(Rc::clone(&calls))),
        );
        (OverlayController::new(store, dispatcher, visible), calls, dir)
    }

    #[test]
    fn toggle_preserves_mode() {
        let (mut ctl, _, _dir) = controller(true);
        ctl.settings_pressed();
        assert_eq!(ctl.state(), OverlayState::VisibleEdit);
        ctl.toggle_requested();
        assert_eq!(ctl.state(), OverlayState::Hidden);
        ctl.toggle_requested();
        assert_eq!(ctl.state(), OverlayState::VisibleEdit);
    }

    #[test]
    fn tile_hotkey_ignored_when_hidden_or_editing() {
        let (mut ctl, calls, _dir) = controller(false);
        assert!(ctl.tile_requested(0).is_none());
        ctl.toggle_requested();
        ctl.settings_pressed();
        assert!(ctl.tile_requested(0).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn tile_hotkey_past_page_end_is_noop() {
        let (mut ctl, calls, _dir) = controller(true);
        assert!(ctl.tile_requested(8).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn click_in_edit_mode_is_skipped() {
        let (mut ctl, calls, _dir) = controller(true);
        ctl.settings_pressed();
        assert_eq!(ctl.tile_clicked(6), Some(DispatchOutcome::Skipped));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn listener_failure_notice_is_kept_once() {
        let (mut ctl, _, _dir) = controller(true);
        ctl.handle_event(AppEvent::ListenerFailed("denied".into()));
        ctl.handle_event(AppEvent::ListenerFailed("again".into()));
        assert_eq!(ctl.notice(), Some("Global hotkeys unavailable: denied"));
        assert_eq!(ctl.info_text(), "Global hotkeys unavailable: denied");
        ctl.dismiss_notice();
        assert!(ctl.info_text().starts_with("Press Ctrl+Shift+D"));
    }

    #[test]
    fn page_label_only_with_several_pages() {
        let (mut ctl, _, dir) = controller(true);
        assert_eq!(ctl.page_label(), None);
        assert_eq!(ctl.add_page_clicked(), Ok(1));
        assert_eq!(ctl.page_label().as_deref(), Some("Page 2/2"));
        assert!(dir.path().join("layout.json").exists());
    }

    #[test]
    fn minimize_is_independent_of_visibility() {
        let (mut ctl, _, _dir) = controller(true);
        ctl.toggle_minimized();
        assert!(ctl.is_minimized());
        assert_eq!(ctl.state(), OverlayState::VisibleNormal);
    }
}
