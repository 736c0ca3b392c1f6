//! Layout limits, hotkey constants and tile style defaults.

// === Grid ===

/// Rows of tiles on one page.
pub const GRID_ROWS: usize = 2;

/// Columns of tiles on one page.
pub const GRID_COLS: usize = 4;

/// Maximum tiles per page (row-major display order).
pub const PAGE_CAPACITY: usize = GRID_ROWS * GRID_COLS;

/// Maximum pages in a layout.
pub const MAX_PAGES: usize = 5;

// === Hotkeys ===

/// Base key of the toggle chord (primary modifier + Shift + D).
pub const TOGGLE_KEY: char = 'd';

/// Shifted symbols of digits 1..8 on a US layout, accepted as tile-select
/// alternatives.
pub const SHIFTED_DIGITS: [char; PAGE_CAPACITY] = ['!', '@', '#', '$', '%', '^', '&', '*'];

// === Persistence ===

/// File name of the persisted layout inside the user's home directory.
pub const LAYOUT_FILE_NAME: &str = ".umpb_layout.json";

// === Tile Styles ===

/// Style tag for shortcut tiles.
pub const COLOR_SHORTCUT: &str = "bg-blue-500";

/// Style tag for app tiles.
pub const COLOR_APP: &str = "bg-purple-500";

/// Style tag for built-in shortcut tiles.
pub const COLOR_BUILTIN_SHORTCUT: &str = "bg-green-500";
