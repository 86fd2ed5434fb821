//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! the registry and persistence layers. Operations never read process-wide
//! environment variables themselves; the binaries resolve everything up
//! front and hand a [`ClinicConfig`] down.

use crate::constants::{DEFAULT_DATA_DIR, DOCTORS_FILENAME, PATIENTS_FILENAME, STAFF_FILENAME};
use std::path::{Path, PathBuf};

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    data_dir: PathBuf,
}

impl ClinicConfig {
    /// Create a config rooted at an explicit data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory from an optional command-line override
    /// and an optional environment value, falling back to the default.
    ///
    /// Precedence: flag, then environment, then [`DEFAULT_DATA_DIR`].
    pub fn resolve(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let data_dir = flag
            .or_else(|| {
                env_value
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn doctors_file(&self) -> PathBuf {
        self.data_dir.join(DOCTORS_FILENAME)
    }

    pub fn patients_file(&self) -> PathBuf {
        self.data_dir.join(PATIENTS_FILENAME)
    }

    pub fn staff_file(&self) -> PathBuf {
        self.data_dir.join(STAFF_FILENAME)
    }
}
