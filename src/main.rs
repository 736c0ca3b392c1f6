//! Macro pad overlay binary.
//!
//! Wires the core to an always-on-top frameless egui window and the global
//! hotkey listener.

mod ui;

use eframe::egui;
use tracing::{error, info};

use umpb::{
    logging, ActionDispatcher, AppConfig, EventBus, HotkeyListener, LayoutStore,
    OverlayController,
};

use crate::ui::{OverlayApp, WINDOW_SIZE};

fn main() -> eframe::Result<()> {
    logging::init();

    let config = AppConfig::from_env();
    let modifiers = config.modifier_map();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        layout = %config.layout_path.display(),
        primary = %modifiers.primary(),
        "starting macro pad"
    );

    let store = LayoutStore::load(&config.layout_path, config.platform);
    let dispatcher = ActionDispatcher::system(modifiers);
    let mut controller = OverlayController::new(store, dispatcher, config.start_visible);
    let bus = EventBus::new();

    // The window is always created visible; a hidden start minimises it on
    // the first frame.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Macro Pad")
            .with_inner_size(WINDOW_SIZE)
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "umpb",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());

            let ctx = cc.egui_ctx.clone();
            let publisher = bus.publisher().with_waker(move || ctx.request_repaint());
            let mut listener = HotkeyListener::new(modifiers);
            if let Err(err) = listener.start(publisher) {
                error!(error = %err, "failed to start global hotkey listener");
                controller.report_listener_failure(&err.to_string());
            }

            Ok(Box::new(OverlayApp::new(controller, bus, listener)))
        }),
    )
}
