//! Inline form for adding a tile to the current page.

use eframe::egui::{self, Color32, RichText};

use umpb::actions::parse_combo;
use umpb::{ModifierMap, OverlayController, Tile};

const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormKind {
    #[default]
    Shortcut,
    App,
}

#[derive(Debug, Default)]
pub struct TileForm {
    open: bool,
    kind: FormKind,
    name: String,
    combo: String,
    path: String,
    error: Option<String>,
}

impl TileForm {
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Build a tile from the current inputs.
    fn build(&self, modifiers: &ModifierMap) -> Result<Tile, String> {
        match self.kind {
            FormKind::Shortcut => {
                parse_combo(&self.combo, modifiers).map_err(|err| err.to_string())?;
                Ok(Tile::shortcut(&self.name, &self.combo))
            }
            FormKind::App => {
                if self.path.trim().is_empty() {
                    return Err("choose a program or file".to_string());
                }
                Ok(Tile::app(&self.path))
            }
        }
    }

    /// Draw the form and apply it to `ctl` on submit.
    pub fn show(&mut self, ui: &mut egui::Ui, ctl: &mut OverlayController) {
        if !self.open {
            return;
        }
        let full = ctl.current_page().is_full();

        ui.separator();
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.kind, FormKind::Shortcut, "Shortcut");
            ui.radio_value(&mut self.kind, FormKind::App, "App");
        });
        match self.kind {
            FormKind::Shortcut => {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.name)
                            .hint_text("Name")
                            .desired_width(110.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.combo)
                            .hint_text("ctrl+shift+k")
                            .desired_width(140.0),
                    );
                });
            }
            FormKind::App => {
                ui.add(
                    egui::TextEdit::singleline(&mut self.path)
                        .hint_text("/path/to/program")
                        .desired_width(f32::INFINITY),
                );
            }
        }

        ui.horizontal(|ui| {
            let add = ui.add_enabled(!full, egui::Button::new("Add"));
            if full {
                add.on_disabled_hover_text("This page is full");
            } else if add.clicked() {
                match self.build(ctl.modifiers()) {
                    Ok(tile) => match ctl.add_tile(tile) {
                        Ok(()) => self.close(),
                        Err(err) => self.error = Some(err.to_string()),
                    },
                    Err(message) => self.error = Some(message),
                }
            }
            if ui.button("Cancel").clicked() {
                self.close();
            }
        });
        if let Some(error) = &self.error {
            ui.label(RichText::new(error).size(10.0).color(ERROR));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umpb::{Platform, TileKind};

    fn modifiers() -> ModifierMap {
        ModifierMap::for_platform(Platform::Linux)
    }

    #[test]
    fn builds_shortcut_tile() {
        let form = TileForm {
            name: "Mute".into(),
            combo: "ctrl+shift+m".into(),
            ..Default::default()
        };
        let tile = form.build(&modifiers()).unwrap();
        assert_eq!(tile.kind, TileKind::Shortcut);
        assert_eq!(tile.key, "ctrl+shift+m");
    }

    #[test]
    fn rejects_unparseable_combo() {
        let form = TileForm {
            combo: "ctrl+nope".into(),
            ..Default::default()
        };
        assert!(form.build(&modifiers()).is_err());
    }

    #[test]
    fn app_needs_a_path() {
        let mut form = TileForm {
            kind: FormKind::App,
            ..Default::default()
        };
        assert!(form.build(&modifiers()).is_err());
        form.path = "/usr/bin/gimp".into();
        assert_eq!(form.build(&modifiers()).unwrap().name, "gimp");
    }
}
