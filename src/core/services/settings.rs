//=========================================================================
// Settings Store
//=========================================================================
//
// Key-value persistence consulted by the engine outside the frame path.
//
// The only persisted value is the high score. Failures never reach the
// caller: a read that fails yields the default, a write that fails is
// logged and forgotten.
//
// On-disk format (`<data_dir>/<app_name>.toml`):
// ```toml
// high_score = 1200
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

//=== External Crates =====================================================

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Modules ====================================================

use super::AppContext;

//=== SettingsStore =======================================================

/// Persisted application settings. Callable from any thread.
pub trait SettingsStore: Send + Sync {
    /// Stored high score, `0` if none was ever submitted.
    fn read_high_score(&self) -> i32;

    /// Stores `score`, returning once the store has accepted it.
    fn submit_high_score(&self, score: i32);
}

//=== Settings Document ===================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    high_score: i32,
}

#[derive(Debug, Error)]
enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

//=== FileSettingsStore ===================================================

/// TOML-file backed store, located through the [`AppContext`].
///
/// Reads and writes are serialized by a mutex so concurrent submitters
/// cannot interleave partial files.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSettingsStore {
    pub fn new(context: &AppContext) -> Self {
        Self {
            path: context.settings_path(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Settings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(settings)?)?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn read_high_score(&self) -> i32 {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match self.load() {
            Ok(settings) => settings.high_score,
            Err(e) => {
                warn!(target: "services", "Reading {} failed: {}", self.path.display(), e);
                0
            }
        }
    }

    fn submit_high_score(&self, score: i32) {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        // A corrupt file is replaced rather than blocking the submit.
        let mut settings = self.load().unwrap_or_default();
        settings.high_score = score;

        match self.store(&settings) {
            Ok(()) => debug!(target: "services", "High score {} saved", score),
            Err(e) => warn!(target: "services", "Writing {} failed: {}", self.path.display(), e),
        }
    }
}

//=== MemorySettingsStore =================================================

/// Volatile store for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Settings>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn read_high_score(&self) -> i32 {
        self.settings
            .lock()
            .map(|s| s.high_score)
            .unwrap_or_default()
    }

    fn submit_high_score(&self, score: i32) {
        if let Ok(mut settings) = self.settings.lock() {
            settings.high_score = score;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn store_in(dir: &tempfile::TempDir) -> FileSettingsStore {
        FileSettingsStore::new(&AppContext::new("asteroids", dir.path()))
    }

    #[test]
    fn missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).read_high_score(), 0);
    }

    #[test]
    fn submitted_score_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).submit_high_score(4200);
        assert_eq!(store_in(&dir).read_high_score(), 4200);
    }

    #[test]
    fn file_is_plain_toml() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).submit_high_score(17);

        let text = fs::read_to_string(dir.path().join("asteroids.toml")).unwrap();
        assert_eq!(text.trim(), "high_score = 17");
    }

    #[test]
    fn corrupt_file_reads_zero_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("asteroids.toml"), "high_score = [").unwrap();

        let store = store_in(&dir);
        assert_eq!(store.read_high_score(), 0);

        store.submit_high_score(9);
        assert_eq!(store.read_high_score(), 9);
    }

    #[test]
    fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileSettingsStore::new(&AppContext::new("game", &nested));

        store.submit_high_score(3);
        assert_eq!(store.read_high_score(), 3);
    }

    #[test]
    fn concurrent_submitters_leave_a_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));

        let handles: Vec<_> = (1..=8)
            .map(|score| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.submit_high_score(score))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let score = store.read_high_score();
        assert!((1..=8).contains(&score));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.read_high_score(), 0);
        store.submit_high_score(55);
        assert_eq!(store.read_high_score(), 55);
    }
}
