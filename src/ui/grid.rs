//! Widgets for the overlay body.
//!
//! Widgets only read the controller and record what the user asked for as
//! [`Intent`]s; `OverlayApp` applies them after the frame is laid out.

use eframe::egui::{self, Color32, RichText, Sense, Vec2};

use umpb::model::{GRID_COLS, GRID_ROWS};
use umpb::OverlayController;

pub const TILE_SIZE: Vec2 = Vec2::new(76.0, 64.0);

const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const MUTED: Color32 = Color32::from_rgb(71, 85, 105);
const INFO: Color32 = Color32::from_rgb(100, 116, 139);
const PAGE_LABEL: Color32 = Color32::from_rgb(148, 163, 184);

/// Something the user did this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Home,
    Settings,
    Power,
    Minimize,
    DragWindow,
    TileClicked(usize),
    DeleteTile(String),
    OpenForm,
    GoToPage(usize),
    AddPage,
}

/// Fill for a tile's style tag.
fn tile_fill(color: &str) -> Color32 {
    match color {
        "bg-blue-500" => Color32::from_rgb(59, 130, 246),
        "bg-purple-500" => Color32::from_rgb(168, 85, 247),
        "bg-green-500" => Color32::from_rgb(34, 197, 94),
        "bg-red-500" => Color32::from_rgb(239, 68, 68),
        "bg-orange-500" => Color32::from_rgb(249, 115, 22),
        _ => MUTED,
    }
}

pub fn header(ui: &mut egui::Ui, ctl: &OverlayController, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        let title = egui::Label::new(RichText::new("⠿ Macro Pad").strong()).sense(Sense::drag());
        let handle = ui.add(title);
        if handle.drag_started() {
            intents.push(Intent::DragWindow);
        }
        if let Some(label) = ctl.page_label() {
            ui.label(RichText::new(label).size(11.0).color(PAGE_LABEL));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⏻").on_hover_text("Save and quit").clicked() {
                intents.push(Intent::Power);
            }
            let settings = ui
                .selectable_label(ctl.is_edit_mode(), "⚙")
                .on_hover_text("Edit mode");
            if settings.clicked() {
                intents.push(Intent::Settings);
            }
            if ui.button("🏠").on_hover_text("First page").clicked() {
                intents.push(Intent::Home);
            }
            let minimize = if ctl.is_minimized() { "▢" } else { "–" };
            if ui.button(minimize).on_hover_text("Minimise").clicked() {
                intents.push(Intent::Minimize);
            }
        });
    });
}

pub fn tile_grid(ui: &mut egui::Ui, ctl: &OverlayController, intents: &mut Vec<Intent>) {
    let page = ctl.current_page();
    let edit = ctl.is_edit_mode();
    let mut offered_add = false;

    egui::Grid::new("tiles")
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLS {
                    let index = row * GRID_COLS + col;
                    match page.get(index) {
                        Some(tile) => {
                            let hint = tile.display_hint();
                            let text = match &hint.caption {
                                Some(caption) => format!("{}\n{}", hint.glyph, caption),
                                None => hint.glyph.to_string(),
                            };
                            let button = egui::Button::new(RichText::new(text).size(15.0))
                                .fill(tile_fill(&tile.color));
                            let response = ui
                                .add_sized(TILE_SIZE, button)
                                .on_hover_text(&hint.tooltip);
                            if response.clicked() {
                                intents.push(Intent::TileClicked(index));
                            }
                            if edit {
                                let corner = egui::Rect::from_min_size(
                                    response.rect.right_top() - egui::vec2(18.0, 0.0),
                                    egui::vec2(18.0, 18.0),
                                );
                                if ui.put(corner, egui::Button::new("✕").small()).clicked() {
                                    intents.push(Intent::DeleteTile(tile.id.clone()));
                                }
                            }
                        }
                        None if edit && !offered_add => {
                            offered_add = true;
                            if ui.add_sized(TILE_SIZE, egui::Button::new("➕")).clicked() {
                                intents.push(Intent::OpenForm);
                            }
                        }
                        None => {
                            ui.allocate_exact_size(TILE_SIZE, Sense::hover());
                        }
                    }
                }
                ui.end_row();
            }
        });
}

pub fn page_nav(ui: &mut egui::Ui, ctl: &OverlayController, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        let current = ctl.current_page_index();
        for index in 0..ctl.pages().len() {
            let color = if index == current { ACCENT } else { MUTED };
            let dot = egui::Button::new(RichText::new("●").color(color).size(10.0)).frame(false);
            if ui.add(dot).on_hover_text(format!("Page {}", index + 1)).clicked() {
                intents.push(Intent::GoToPage(index));
            }
        }
        if ctl.is_edit_mode() && ctl.can_add_page() {
            let add = egui::Button::new(RichText::new("⊕").color(ACCENT)).frame(false);
            if ui.add(add).on_hover_text("New page").clicked() {
                intents.push(Intent::AddPage);
            }
        }
    });
}

pub fn info_line(ui: &mut egui::Ui, ctl: &OverlayController) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(ctl.info_text()).size(9.0).color(INFO));
    });
}
