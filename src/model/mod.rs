//! Application domain model.
//!
//! This module contains pure business logic (no FFI, no I/O): tiles, pages,
//! the paged layout and the constants that bound them.
//!
//! Persistence lives in `storage`.

pub mod constants;
pub mod layout;
pub mod tile;

pub use constants::*;
pub use layout::{builtin_tiles, Layout, Page};
pub use tile::{DisplayHint, Tile, TileKind};
