//! JSON persistence for the paged tile layout.
//!
//! Stores the layout in `~/.umpb_layout.json` (see `AppConfig`).
//!
//! The store is the only writer of the file. Every structural mutation is
//! written through immediately; write failures are logged and the in-memory
//! layout stays authoritative until the next successful save.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{LayoutError, StorageError};
use crate::model::{Layout, Page, Tile};
use crate::platform::Platform;

/// Read and validate a layout file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_layout(path: &Path) -> Result<Option<Layout>, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let pages: Vec<Page> =
        serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let layout = Layout::repaired(pages).map_err(|source| StorageError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(layout))
}

/// Serialize `layout` to `path`, replacing the file atomically.
pub fn write_layout(path: &Path, layout: &Layout) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(layout)?;
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}

/// Owner of the layout, its backing file and the current page.
#[derive(Debug)]
pub struct LayoutStore {
    path: PathBuf,
    layout: Layout,
    current_page: usize,
}

impl LayoutStore {
    /// Load the layout at `path`, falling back to the built-in layout when
    /// the file is missing, unreadable or corrupt. Never fails.
    pub fn load(path: impl Into<PathBuf>, platform: Platform) -> Self {
        let path = path.into();
        let layout = match read_layout(&path) {
            Ok(Some(layout)) => {
                info!(path = %path.display(), pages = layout.page_count(), "loaded layout");
                layout
            }
            Ok(None) => {
                info!(path = %path.display(), "no saved layout, using built-in tiles");
                Layout::builtin(platform)
            }
            Err(err) => {
                warn!(error = %err, "failed to load layout, using built-in tiles");
                Layout::builtin(platform)
            }
        };
        Self::with_layout(path, layout)
    }

    /// Wrap an in-memory layout without touching the filesystem.
    pub fn with_layout(path: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            path: path.into(),
            layout,
            current_page: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pages(&self) -> &[Page] {
        self.layout.pages()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> &Page {
        // current_page is kept in range by every mutation.
        &self.layout.pages()[self.current_page]
    }

    /// Tile at `index` on the current page.
    pub fn current_tile(&self, index: usize) -> Option<&Tile> {
        self.current_page().get(index)
    }

    /// Write the whole layout to disk.
    pub fn save(&self) -> Result<(), StorageError> {
        write_layout(&self.path, &self.layout)?;
        debug!(path = %self.path.display(), "layout saved");
        Ok(())
    }

    /// Save, logging instead of failing.
    pub fn persist(&self) {
        if let Err(err) = self.save() {
            warn!(error = %err, "failed to save layout");
        }
    }

    pub fn add_tile(&mut self, page_index: usize, tile: Tile) -> Result<(), LayoutError> {
        self.layout.add_tile(page_index, tile)?;
        self.persist();
        Ok(())
    }

    /// Remove a tile by id. Unknown ids are ignored.
    pub fn delete_tile(&mut self, page_index: usize, tile_id: &str) {
        if self.layout.delete_tile(page_index, tile_id) {
            self.persist();
        } else {
            debug!(page_index, tile_id, "delete ignored, tile not found");
        }
    }

    pub fn add_page(&mut self) -> Result<usize, LayoutError> {
        let index = self.layout.add_page()?;
        self.persist();
        Ok(index)
    }

    /// Move to page `index`. Out-of-range requests are rejected and the
    /// current page is left untouched.
    pub fn go_to_page(&mut self, index: usize) -> Result<(), LayoutError> {
        let len = self.layout.page_count();
        if index >= len {
            return Err(LayoutError::PageOutOfRange { index, len });
        }
        self.current_page = index;
        Ok(())
    }
}
