//! Core facility search functionality.
//!
//! This module provides the main [`FacilitySearcher`] interface: a loaded,
//! read-only facility store plus the keyword search and id selection
//! operations that run against it.
//!
//! # Quick Start
//!
//! ```rust
//! use facility_finder::{FacilitySearcher, data::FacilityId};
//!
//! let searcher = FacilitySearcher::new_embedded()?;
//!
//! // Case-insensitive substring search, store order preserved
//! let courts = searcher.search("court");
//! assert!(!courts.is_empty());
//!
//! // Resolve a single facility by id
//! let pool = searcher.select_by_id(&FacilityId::Number(3))?;
//! assert_eq!(pool.name, "Pool");
//! # Ok::<(), facility_finder::error::FacilityError>(())
//! ```

use facility_finder_data::{DataSource, FacilityId, FacilityRecord, FacilityStore, StoreOrigin};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::FacilityError,
    search::{
        SearchConfig, SearchOutcome, SelectError, search_facilities,
        search_facilities_with_config,
    },
};

/// The main facility searcher.
///
/// Owns the facility store for its whole lifetime. The store is never
/// modified after construction, so a searcher can be shared across threads
/// behind an `Arc` without locking.
///
/// # Examples
///
/// ```rust
/// use facility_finder::{FacilitySearcher, SearchConfigBuilder, SearchOutcome};
///
/// let searcher = FacilitySearcher::new_embedded()?;
///
/// let config = SearchConfigBuilder::form().build();
/// let outcome = searcher.search_with_config("  ", &config);
/// assert_eq!(outcome, SearchOutcome::NoKeyword);
/// # Ok::<(), facility_finder::error::FacilityError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FacilitySearcher {
    store: FacilityStore,
}

impl FacilitySearcher {
    /// Create a `FacilitySearcher` by loading the given data source.
    ///
    /// A missing or malformed source is returned as an error; callers treat it
    /// as fatal at startup.
    #[instrument(name = "Initialize FacilitySearcher", level = "info")]
    pub fn initialize(data_source: DataSource) -> Result<Self, FacilityError> {
        info!(%data_source, "Initializing FacilitySearcher");
        let t_init = std::time::Instant::now();

        let store = FacilityStore::load(&data_source)?;

        info!(
            facilities = store.len(),
            elapsed_seconds = ?t_init.elapsed(),
            "FacilitySearcher initialization complete"
        );
        Ok(Self { store })
    }

    /// Create a `FacilitySearcher` using the embedded sample dataset.
    pub fn new_embedded() -> Result<Self, FacilityError> {
        Self::initialize(DataSource::Embedded)
    }

    /// Wrap an already loaded store.
    pub fn from_store(store: FacilityStore) -> Self {
        Self { store }
    }

    /// Case-insensitive keyword search; an empty keyword returns every facility.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, keyword: &str) -> Vec<&FacilityRecord> {
        let matches = search_facilities(self.store.records(), keyword);
        debug!(matches = matches.len(), "Search complete");
        matches
    }

    pub fn search_with_config(&self, keyword: &str, config: &SearchConfig) -> SearchOutcome<'_> {
        search_facilities_with_config(self.store.records(), keyword, config)
    }

    /// Resolve the facility with the given id.
    pub fn select_by_id(&self, id: &FacilityId) -> Result<&FacilityRecord, SelectError> {
        self.store.get(id).ok_or_else(|| {
            debug!(%id, "Selected facility does not exist");
            SelectError::NotFound { id: id.clone() }
        })
    }

    /// Resolve raw user input to an id and select that facility.
    ///
    /// See [`FacilityStore::resolve_id`] for how the input is matched.
    pub fn select_by_key(&self, input: &str) -> Result<&FacilityRecord, SelectError> {
        self.select_by_id(&self.store.resolve_id(input))
    }

    pub fn store(&self) -> &FacilityStore {
        &self.store
    }

    pub fn records(&self) -> &[FacilityRecord] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get information about the loaded data.
    pub fn info(&self) -> SearcherInfo {
        SearcherInfo {
            total_facilities: self.store.len(),
            origin: self.store.origin().clone(),
        }
    }

    /// Get a summary string of the searcher.
    pub fn summary(&self) -> String {
        let info = self.info();
        format!(
            "FacilitySearcher: {} facilities from {}",
            info.total_facilities, info.origin
        )
    }
}

/// Information about a `FacilitySearcher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearcherInfo {
    pub total_facilities: usize,
    pub origin: StoreOrigin,
}

/// Builder for creating `FacilitySearcher` instances.
///
/// # Examples
///
/// ```rust
/// use facility_finder::{DataSource, FacilitySearcherBuilder};
///
/// // A missing file falls back to the embedded dataset
/// let searcher = FacilitySearcherBuilder::new()
///     .data_source(DataSource::File("does-not-exist.json".into()))
///     .embedded_fallback(true)
///     .build()?;
/// assert!(!searcher.is_empty());
/// # Ok::<(), facility_finder::error::FacilityError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FacilitySearcherBuilder {
    data_source: DataSource,
    embedded_fallback: bool,
}

impl FacilitySearcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data source to load.
    pub fn data_source(mut self, source: DataSource) -> Self {
        self.data_source = source;
        self
    }

    /// Fall back to the embedded dataset when the configured source fails to load.
    pub fn embedded_fallback(mut self, fallback: bool) -> Self {
        self.embedded_fallback = fallback;
        self
    }

    pub fn build(self) -> Result<FacilitySearcher, FacilityError> {
        match FacilitySearcher::initialize(self.data_source.clone()) {
            Ok(searcher) => Ok(searcher),
            Err(e) if self.embedded_fallback && self.data_source != DataSource::Embedded => {
                warn!(
                    error = %e,
                    data_source = %self.data_source,
                    "Failed to load facility data, falling back to embedded dataset"
                );
                FacilitySearcher::new_embedded()
            }
            Err(e) => Err(e),
        }
    }
}
