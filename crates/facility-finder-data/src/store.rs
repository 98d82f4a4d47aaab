use ahash::AHashMap;
use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use super::error::{DataError, Result};
use crate::{
    DataSource, embedded,
    record::{FacilityId, FacilityRecord},
};

/// Where the records of a [`FacilityStore`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOrigin {
    Embedded,
    File(PathBuf),
    InMemory,
}

impl fmt::Display for StoreOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dataset"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::InMemory => write!(f, "in-memory records"),
        }
    }
}

/// Ordered, read-only collection of facility records.
///
/// Ids are unique; record order is the order of the source and never changes
/// after construction.
#[derive(Debug, Clone)]
pub struct FacilityStore {
    records: Vec<FacilityRecord>,
    index: AHashMap<FacilityId, usize>,
    origin: StoreOrigin,
}

impl FacilityStore {
    /// Build a store from records already in memory.
    ///
    /// Fails with [`DataError::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<FacilityRecord>) -> Result<Self> {
        Self::with_origin(records, StoreOrigin::InMemory)
    }

    fn with_origin(records: Vec<FacilityRecord>, origin: StoreOrigin) -> Result<Self> {
        let mut index = AHashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(DataError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self {
            records,
            index,
            origin,
        })
    }

    /// Parse a JSON array of facility objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<FacilityRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<FacilityRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    #[instrument(name = "Load facility file", skip_all, fields(path = %path.as_ref().display()), level = "info")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataFile {
                path: path.to_path_buf(),
            });
        }
        let t_load = std::time::Instant::now();
        let records: Vec<FacilityRecord> =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;
        let store = Self::with_origin(records, StoreOrigin::File(path.to_path_buf()))?;
        info!(
            facilities = store.len(),
            load_time = ?t_load.elapsed(),
            "Loaded facility file"
        );
        Ok(store)
    }

    /// Load the store for a [`DataSource`].
    pub fn load(source: &DataSource) -> Result<Self> {
        match source {
            DataSource::Embedded => {
                let records = embedded::load_embedded_records()?;
                Self::with_origin(records, StoreOrigin::Embedded)
            }
            DataSource::File(path) => Self::from_path(path),
            DataSource::DataDir => Self::from_path(crate::get_data_dir().join(crate::DATA_FILE_NAME)),
        }
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &FacilityId) -> Option<&FacilityRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &FacilityId) -> bool {
        self.index.contains_key(id)
    }

    /// Map user input (a query string, dropdown value or CLI argument) to the
    /// id key this store actually uses.
    ///
    /// The trimmed input matches a text id exactly before it is tried as an
    /// integer, so ids like `"001"` or `"7"` in the data file stay reachable.
    /// Input that matches nothing falls back to [`FacilityId::parse`].
    pub fn resolve_id(&self, input: &str) -> FacilityId {
        let input = input.trim();
        let text = FacilityId::Text(input.to_owned());
        if self.contains(&text) {
            return text;
        }
        FacilityId::parse(input)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacilityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn origin(&self) -> &StoreOrigin {
        &self.origin
    }
}

impl<'a> IntoIterator for &'a FacilityStore {
    type Item = &'a FacilityRecord;
    type IntoIter = std::slice::Iter<'a, FacilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
