//! Persistence of the tile layout.

pub mod layout_store;

pub use layout_store::{read_layout, write_layout, LayoutStore};
