//! Per-run font cache keyed by canonical path and modification time.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
    time::{Duration, SystemTime},
};

use log::debug;

use crate::{DEFAULT_READ_TIMEOUT, FontHandle, LoadError, Result};

type Slot = Arc<OnceLock<Result<Arc<FontHandle>>>>;

struct CacheEntry {
    modified: Option<SystemTime>,
    slot: Slot,
}

/// Shared cache of loaded fonts.
///
/// Concurrent readers of the same path block on one load; a changed mtime
/// invalidates the entry. Failures are cached too, so a broken file is read
/// once per run.
pub struct FontCache {
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
    read_timeout: Duration,
    loads: AtomicUsize,
}

impl Default for FontCache {
    fn default() -> Self {
        Self::with_read_timeout(DEFAULT_READ_TIMEOUT)
    }
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_timeout(read_timeout: Duration) -> Self {
        Self { entries: Mutex::new(HashMap::new()), read_timeout, loads: AtomicUsize::new(0) }
    }

    /// Return the handle for `path`, loading it at most once per mtime.
    ///
    /// Paths naming the same file share one entry; the handle and any error
    /// keep the path as given by the first caller.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<FontHandle>> {
        let path = path.as_ref();
        let key = cache_key(path);
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

        let slot = {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            match entries.get(&key) {
                Some(entry) if entry.modified == modified => Arc::clone(&entry.slot),
                _ => {
                    let slot: Slot = Arc::new(OnceLock::new());
                    entries.insert(key, CacheEntry { modified, slot: Arc::clone(&slot) });
                    slot
                }
            }
        };

        slot.get_or_init(|| {
            self.loads.fetch_add(1, Ordering::Relaxed);
            debug!("cache miss: {}", path.display());
            FontHandle::load_with_timeout(path, self.read_timeout).map(Arc::new)
        })
        .clone()
    }

    /// Number of actual file loads performed.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Cached failure for `path`, if its last load failed.
    pub fn cached_error(&self, path: &Path) -> Option<LoadError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&cache_key(path))?.slot.get()?.as_ref().err().cloned()
    }
}

/// Missing files cannot be canonicalised and are keyed as given.
fn cache_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::{io::Write, thread, time::Duration};

    use super::*;

    fn write_font(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::File::create(&path).unwrap().write_all(data).unwrap();
        path
    }

    #[test]
    fn loads_each_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Vazirmatn-Variable.ttf", font_test_data::VAZIRMATN_VAR);

        let cache = FontCache::new();
        let a = cache.get_or_load(&path).unwrap();
        let b = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.load_count(), 1);
    }

    #[test]
    fn equivalent_paths_share_one_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Simple-Regular.ttf", font_test_data::SIMPLE_GLYF);
        fs::create_dir(dir.path().join("sub")).unwrap();
        let detour = dir.path().join("sub").join("..").join("Simple-Regular.ttf");

        let cache = FontCache::new();
        let a = cache.get_or_load(&path).unwrap();
        let b = cache.get_or_load(&detour).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.load_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_readers_share_one_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Vazirmatn-Variable.ttf", font_test_data::VAZIRMATN_VAR);
        let cache = Arc::new(FontCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = path.clone();
                thread::spawn(move || cache.get_or_load(&path).unwrap())
            })
            .collect();
        let fonts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(cache.load_count(), 1);
        assert!(fonts.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn changed_mtime_invalidates_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Simple-Regular.ttf", font_test_data::SIMPLE_GLYF);

        let cache = FontCache::new();
        cache.get_or_load(&path).unwrap();

        let later = SystemTime::now() + Duration::from_secs(60);
        fs::File::options().write(true).open(&path).unwrap().set_modified(later).unwrap();

        cache.get_or_load(&path).unwrap();
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn failures_are_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Broken-Regular.ttf", b"garbage");

        let cache = FontCache::new();
        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.get_or_load(&path).is_err());
        assert_eq!(cache.load_count(), 1);
        assert!(matches!(cache.cached_error(&path), Some(LoadError::Parse { .. })));
    }

    #[test]
    fn clear_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_font(dir.path(), "Simple-Regular.ttf", font_test_data::SIMPLE_GLYF);

        let cache = FontCache::new();
        cache.get_or_load(&path).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.get_or_load(&path).unwrap();
        assert_eq!(cache.load_count(), 2);
    }
}
