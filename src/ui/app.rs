//! eframe application driving the overlay controller.

use eframe::egui::{self, Vec2, ViewportCommand};
use tracing::{debug, info};

use umpb::{EventBus, Flow, HotkeyListener, OverlayController};

use super::grid::{self, Intent};
use super::tile_form::TileForm;

/// Default window size: header, 2x4 grid, page dots and info line.
pub const WINDOW_SIZE: Vec2 = Vec2::new(344.0, 260.0);

const MINIMIZED_HEIGHT: f32 = 40.0;
const FORM_HEIGHT: f32 = 110.0;

pub struct OverlayApp {
    controller: OverlayController,
    bus: EventBus,
    listener: HotkeyListener,
    form: TileForm,
    /// Last visibility applied to the window.
    shown: Option<bool>,
    size: Vec2,
    quitting: bool,
}

impl OverlayApp {
    pub fn new(controller: OverlayController, bus: EventBus, listener: HotkeyListener) -> Self {
        Self {
            controller,
            bus,
            listener,
            form: TileForm::default(),
            shown: None,
            size: WINDOW_SIZE,
            quitting: false,
        }
    }

    fn desired_size(&self) -> Vec2 {
        if self.controller.is_minimized() {
            Vec2::new(WINDOW_SIZE.x, MINIMIZED_HEIGHT)
        } else if self.form.is_open() {
            Vec2::new(WINDOW_SIZE.x, WINDOW_SIZE.y + FORM_HEIGHT)
        } else {
            WINDOW_SIZE
        }
    }

    fn sync_window(&mut self, ctx: &egui::Context) {
        let visible = self.controller.is_visible();
        if self.shown != Some(visible) {
            for command in visibility_commands(visible) {
                ctx.send_viewport_cmd(command);
            }
            self.shown = Some(visible);
        }

        let size = self.desired_size();
        if size != self.size {
            ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
            self.size = size;
        }
    }

    fn apply(&mut self, ctx: &egui::Context, intent: Intent) -> Flow {
        debug!(?intent, "ui intent");
        match intent {
            Intent::Home => {
                self.controller.home_pressed();
                self.form.close();
            }
            Intent::Settings => {
                self.controller.settings_pressed();
                if !self.controller.is_edit_mode() {
                    self.form.close();
                }
            }
            Intent::Power => return self.controller.power_pressed(),
            Intent::Minimize => self.controller.toggle_minimized(),
            Intent::DragWindow => ctx.send_viewport_cmd(ViewportCommand::StartDrag),
            Intent::TileClicked(index) => {
                self.controller.tile_clicked(index);
            }
            Intent::DeleteTile(id) => self.controller.delete_tile(&id),
            Intent::OpenForm => self.form.open(),
            Intent::GoToPage(index) => {
                self.controller.page_dot_clicked(index);
                self.form.close();
            }
            Intent::AddPage => {
                if self.controller.add_page_clicked().is_ok() {
                    self.form.close();
                }
            }
        }
        Flow::Continue
    }

    fn quit(&mut self, ctx: &egui::Context) {
        self.quitting = true;
        self.listener.stop();
        ctx.send_viewport_cmd(ViewportCommand::Close);
    }
}

/// Window commands that show or hide the overlay.
///
/// Hiding minimises instead of unmapping: a window made invisible stops
/// receiving redraws on some backends, and then the hotkey waker could never
/// run the frame that shows it again.
pub fn visibility_commands(visible: bool) -> Vec<ViewportCommand> {
    if visible {
        vec![ViewportCommand::Minimized(false), ViewportCommand::Focus]
    } else {
        vec![ViewportCommand::Minimized(true)]
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.bus.drain() {
            self.controller.handle_event(event);
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.quitting {
            info!("window closed, saving layout");
            self.controller.shutdown();
            self.quitting = true;
            self.listener.stop();
            return;
        }

        self.sync_window(ctx);
        if !self.controller.is_visible() {
            return;
        }

        let mut intents = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            grid::header(ui, &self.controller, &mut intents);
            if self.controller.is_minimized() {
                return;
            }
            ui.add_space(4.0);
            grid::tile_grid(ui, &self.controller, &mut intents);
            if self.controller.is_edit_mode() {
                self.form.show(ui, &mut self.controller);
            }
            ui.add_space(4.0);
            grid::page_nav(ui, &self.controller, &mut intents);
            grid::info_line(ui, &self.controller);
        });

        for intent in intents {
            if self.apply(ctx, intent) == Flow::Quit {
                self.quit(ctx);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_never_unmaps_the_window() {
        let hide = visibility_commands(false);
        assert!(matches!(hide.as_slice(), [ViewportCommand::Minimized(true)]));
        assert!(!hide
            .iter()
            .any(|command| matches!(command, ViewportCommand::Visible(_))));
    }

    #[test]
    fn showing_restores_and_focuses() {
        let show = visibility_commands(true);
        assert!(matches!(
            show.as_slice(),
            [ViewportCommand::Minimized(false), ViewportCommand::Focus]
        ));
    }
}
