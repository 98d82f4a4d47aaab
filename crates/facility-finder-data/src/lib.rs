use once_cell::sync::Lazy;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub mod embedded;
pub mod record;
pub mod store;
pub mod test_data;

#[cfg(test)]
static TEST_DATA_DIR: Lazy<tempfile::TempDir> = Lazy::new(|| {
    tempfile::TempDir::new().expect("Failed to create global temporary test data directory")
});

pub const DATA_DIR_DEFAULT: &str = "./facility_data";
pub const DATA_DIR_ENV: &str = "FACILITY_DATA_DIR";
pub const DATA_FILE_NAME: &str = "facilities.json";

/// Global data directory path that automatically determines the appropriate location.
///
/// Resolution order: `FACILITY_DATA_DIR`, the platform data directory (with the
/// `system-dirs` feature), then `./facility_data`.
pub static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if cfg!(test) {
        let temp_dir = test_data_dir();
        warn!(temp_dir = ?temp_dir, "Using temporary data directory for tests");
        return temp_dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    system_data_dir().unwrap_or_else(|| PathBuf::from(DATA_DIR_DEFAULT))
});

pub fn get_data_dir() -> &'static Path {
    DATA_DIR.as_path()
}

#[cfg(test)]
fn test_data_dir() -> PathBuf {
    TEST_DATA_DIR.path().to_path_buf()
}

#[cfg(not(test))]
fn test_data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR_DEFAULT)
}

#[cfg(feature = "system-dirs")]
fn system_data_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "facility-finder")?;
    debug!(dir = ?dirs.data_dir(), "Resolved platform data directory");
    Some(dirs.data_dir().to_path_buf())
}

#[cfg(not(feature = "system-dirs"))]
fn system_data_dir() -> Option<PathBuf> {
    debug!("system-dirs feature disabled, using default data directory");
    None
}

/// Where a facility store is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// The sample dataset compiled into the library
    #[default]
    Embedded,
    /// A JSON file at an explicit path
    File(PathBuf),
    /// `facilities.json` inside the resolved data directory
    DataDir,
}

impl DataSource {
    /// The file this source reads, if it reads one.
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            Self::Embedded => None,
            Self::File(path) => Some(path.clone()),
            Self::DataDir => Some(get_data_dir().join(DATA_FILE_NAME)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::DataDir => write!(f, "data-dir:{}", get_data_dir().display()),
        }
    }
}

mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    use crate::record::FacilityId;

    #[derive(Error, Debug)]
    pub enum DataError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
        #[error("Duplicate facility ID {id} in data source")]
        DuplicateId { id: FacilityId },
        #[error("Facility data file not found: {}", path.display())]
        NoDataFile { path: PathBuf },
    }

    pub type Result<T> = std::result::Result<T, DataError>;
}

pub use error::{DataError, Result};

// Re-export main types
pub use record::{FacilityId, FacilityRecord};
pub use store::{FacilityStore, StoreOrigin};
pub use test_data::{TestDataConfig, create_test_data, test_records};
