//! egui rendering surface for the overlay.
//!
//! - app.rs: `OverlayApp`, the eframe loop driving `OverlayController`
//! - grid.rs: tile grid, header and page navigation widgets
//! - tile_form.rs: inline add-tile form shown in edit mode

mod app;
mod grid;
mod tile_form;

pub use app::{OverlayApp, WINDOW_SIZE};
