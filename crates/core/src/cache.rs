//! Run-scoped cache of loaded fonts and their character categories.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use charset::CharsetCategories;
use font_model::{FontCache, FontHandle};
use log::debug;

use crate::config::FONT_READ_TIMEOUT;

type CategorySlot = Arc<OnceLock<Arc<CharsetCategories>>>;

struct CategoryEntry {
    font: Arc<FontHandle>,
    slot: CategorySlot,
}

/// Everything derived from font files during one assembly run.
///
/// Safe to share across worker threads. Call [`RunCache::clear`] between
/// independent batches.
pub struct RunCache {
    fonts: FontCache,
    categories: Mutex<HashMap<PathBuf, CategoryEntry>>,
}

impl Default for RunCache {
    fn default() -> Self {
        Self::with_read_timeout(FONT_READ_TIMEOUT)
    }
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_timeout(read_timeout: Duration) -> Self {
        Self { fonts: FontCache::with_read_timeout(read_timeout), categories: Mutex::default() }
    }

    pub fn font(&self, path: impl AsRef<Path>) -> font_model::Result<Arc<FontHandle>> {
        self.fonts.get_or_load(path)
    }

    /// Categories of `font`, analysed once per loaded handle.
    pub fn categories(&self, font: &Arc<FontHandle>) -> Arc<CharsetCategories> {
        let slot = {
            let mut entries = self.categories.lock().unwrap_or_else(|e| e.into_inner());
            match entries.get(font.path()) {
                Some(entry) if Arc::ptr_eq(&entry.font, font) => Arc::clone(&entry.slot),
                _ => {
                    let slot: CategorySlot = Arc::new(OnceLock::new());
                    entries.insert(
                        font.path().to_path_buf(),
                        CategoryEntry { font: Arc::clone(font), slot: Arc::clone(&slot) },
                    );
                    slot
                }
            }
        };

        Arc::clone(slot.get_or_init(|| {
            debug!("analysing {}", font.path().display());
            Arc::new(CharsetCategories::analyze(font.coverage()))
        }))
    }

    pub fn font_cache(&self) -> &FontCache {
        &self.fonts
    }

    pub fn clear(&self) {
        self.fonts.clear();
        self.categories.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
