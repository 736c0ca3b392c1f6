//! Pages and the paged layout (pure Rust, no I/O).
//!
//! Persisted as a JSON array of pages, each page an array of tile records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::constants::{COLOR_APP, COLOR_BUILTIN_SHORTCUT, MAX_PAGES, PAGE_CAPACITY};
use super::tile::{Tile, TileKind};
use crate::error::LayoutError;
use crate::platform::Platform;

/// One screen of tiles, in row-major display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    tiles: Vec<Tile>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= PAGE_CAPACITY
    }
}

impl From<Vec<Tile>> for Page {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

/// Ordered pages; always between 1 and `MAX_PAGES` long.
///
/// Only serializable: reading goes through `Vec<Page>` and `from_pages` so
/// a decoded layout is always validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layout {
    pages: Vec<Page>,
}

impl Layout {
    /// Build a layout from pages, enforcing page count, capacity and tile
    /// kind invariants.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, LayoutError> {
        let layout = Self { pages };
        layout.validate()?;
        Ok(layout)
    }

    /// Like `from_pages`, after repairing tiles written by older versions.
    pub fn repaired(pages: Vec<Page>) -> Result<Self, LayoutError> {
        let mut layout = Self { pages };
        layout.normalize();
        layout.validate()?;
        Ok(layout)
    }

    /// First-run layout: one page of built-in tiles for `platform`.
    pub fn builtin(platform: Platform) -> Self {
        Self {
            pages: vec![Page::from(builtin_tiles(platform))],
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn can_add_page(&self) -> bool {
        self.pages.len() < MAX_PAGES
    }

    /// Append `tile` to the page at `page_index`.
    pub fn add_tile(&mut self, page_index: usize, tile: Tile) -> Result<(), LayoutError> {
        tile.validate()?;
        let len = self.pages.len();
        let page = self
            .pages
            .get_mut(page_index)
            .ok_or(LayoutError::PageOutOfRange {
                index: page_index,
                len,
            })?;
        if page.is_full() {
            return Err(LayoutError::CapacityExceeded {
                page: page_index,
                capacity: PAGE_CAPACITY,
            });
        }
        page.tiles.push(tile);
        Ok(())
    }

    /// Remove the tile with `tile_id` from a page, keeping the order of the
    /// rest. Returns whether anything was removed.
    pub fn delete_tile(&mut self, page_index: usize, tile_id: &str) -> bool {
        let Some(page) = self.pages.get_mut(page_index) else {
            return false;
        };
        let before = page.tiles.len();
        page.tiles.retain(|tile| tile.id != tile_id);
        page.tiles.len() != before
    }

    /// Append an empty page and return its index.
    pub fn add_page(&mut self) -> Result<usize, LayoutError> {
        if !self.can_add_page() {
            return Err(LayoutError::PageLimitExceeded { max: MAX_PAGES });
        }
        self.pages.push(Page::new());
        Ok(self.pages.len() - 1)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.pages.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }
        if self.pages.len() > MAX_PAGES {
            return Err(LayoutError::PageLimitExceeded { max: MAX_PAGES });
        }
        for (index, page) in self.pages.iter().enumerate() {
            if page.len() > PAGE_CAPACITY {
                return Err(LayoutError::CapacityExceeded {
                    page: index,
                    capacity: PAGE_CAPACITY,
                });
            }
            for tile in page.tiles() {
                tile.validate()?;
            }
        }
        Ok(())
    }

    /// Repair what older layout files got wrong: app tiles were written with
    /// a placeholder chord such as `"/"`.
    pub fn normalize(&mut self) {
        for tile in self.pages.iter_mut().flat_map(|page| page.tiles.iter_mut()) {
            if tile.kind == TileKind::App && !tile.key.is_empty() {
                debug!(id = %tile.id, key = %tile.key, "dropping placeholder key from app tile");
                tile.key.clear();
            }
        }
    }
}

// === Built-in Tiles ===

fn builtin_app(id: &str, name: &str, action: &str, path: &str) -> Tile {
    Tile {
        id: id.to_string(),
        name: name.to_string(),
        key: String::new(),
        action: action.to_string(),
        color: COLOR_APP.to_string(),
        kind: TileKind::App,
        path: Some(path.to_string()),
    }
}

fn builtin_shortcut(id: &str, name: &str, action: &str, key: &str) -> Tile {
    Tile {
        id: id.to_string(),
        name: name.to_string(),
        key: key.to_string(),
        action: action.to_string(),
        color: COLOR_BUILTIN_SHORTCUT.to_string(),
        kind: TileKind::Shortcut,
        path: None,
    }
}

/// The eight tiles of a fresh install, ids `"1"` to `"8"`.
pub fn builtin_tiles(platform: Platform) -> Vec<Tile> {
    let apps: [(&str, &str, &str, [&str; 3]); 6] = [
        (
            "Photoshop",
            "editing",
            "1",
            [
                "/Applications/Adobe Photoshop 2025/Adobe Photoshop 2025.app",
                r"C:\Program Files\Adobe\Adobe Photoshop 2025\Photoshop.exe",
                "/usr/bin/gimp",
            ],
        ),
        (
            "ArduinoIDE",
            "programming",
            "2",
            [
                "/Applications/Arduino IDE.app",
                r"C:\Program Files\Arduino IDE\Arduino IDE.exe",
                "/usr/bin/arduino-ide",
            ],
        ),
        (
            "Discord",
            "chat",
            "3",
            [
                "/Applications/Discord.app",
                r"C:\Program Files\Discord\Discord.exe",
                "/usr/bin/discord",
            ],
        ),
        (
            "Zenmap",
            "hacking",
            "4",
            [
                "/Applications/Zenmap.app",
                r"C:\Program Files (x86)\Nmap\zenmap.exe",
                "/usr/bin/zenmap",
            ],
        ),
        (
            "FortiClient",
            "vpn",
            "5",
            [
                "/Applications/FortiClient.app",
                r"C:\Program Files\Fortinet\FortiClient\FortiClient.exe",
                "/opt/forticlient/forticlient",
            ],
        ),
        (
            "AnyDesk",
            "remote",
            "6",
            [
                "/Applications/AnyDesk.app",
                r"C:\Program Files (x86)\AnyDesk\AnyDesk.exe",
                "/usr/bin/anydesk",
            ],
        ),
    ];

    let slot = match platform {
        Platform::MacOs => 0,
        Platform::Windows => 1,
        Platform::Linux => 2,
    };
    let primary = if platform.is_macos() { "cmd" } else { "ctrl" };

    let mut tiles: Vec<Tile> = apps
        .iter()
        .map(|(name, action, id, paths)| builtin_app(id, name, action, paths[slot]))
        .collect();
    tiles.push(builtin_shortcut("7", "Save", "save", &format!("{}+s", primary)));
    tiles.push(builtin_shortcut("8", "Find", "find", &format!("{}+f", primary)));
    tiles
}
