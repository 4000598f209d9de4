//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod onboarding;
pub mod store;

pub use onboarding::{ONBOARDING_KEY, OnboardingGate};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Name of the application directory under the platform data dir.
pub const APP_DIR_NAME: &str = "tweetgen";

/// Holds all tweetgen-related paths derived from a data directory.
///
/// This struct enables dependency injection of filesystem paths, allowing
/// tests to use isolated temporary directories instead of the user's real
/// data directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use tweetgen::fs::AppPaths;
///
/// let paths = AppPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.state_file(), Path::new("/tmp/test/state.json"));
/// ```
#[derive(Debug, Clone)]
pub struct AppPaths {
    base: PathBuf,
}

impl AppPaths {
    /// Creates paths rooted at the given data directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the platform data directory.
    ///
    /// Uses `<data_local_dir>/tweetgen`, falling back to `./.tweetgen` when
    /// the platform has no such directory.
    #[must_use]
    pub fn from_platform() -> Self {
        let base = dirs::data_local_dir().map_or_else(
            || PathBuf::from(format!(".{APP_DIR_NAME}")),
            |dir| dir.join(APP_DIR_NAME),
        );
        Self { base }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the persisted key-value state file (`state.json`).
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.base.join("state.json")
    }

    /// Returns the log file (`tweetgen.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.base.join("tweetgen.log")
    }

    /// Ensures the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_base_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.base)
            .with_context(|| format!("Failed to create directory: {}", self.base.display()))
    }

    /// Opens the file-backed key-value store.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_file())
    }
}
