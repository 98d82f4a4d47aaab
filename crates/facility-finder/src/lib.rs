//! Facility Finder - keyword search over a static list of facilities
//!
//! Facility Finder loads a list of named facility records once, keeps it as
//! read-only state, and answers two questions about it: which facilities have
//! a name containing a keyword, and which facility has a given id.
//!
//! # Quick Start
//!
//! ```rust
//! use facility_finder::{FacilitySearcher, data::FacilityId};
//!
//! // Create a searcher using the embedded sample data
//! let searcher = FacilitySearcher::new_embedded()?;
//!
//! // Case-insensitive substring search
//! for facility in searcher.search("COURT") {
//!     println!("{facility}");
//! }
//!
//! // Select one facility by id
//! match searcher.select_by_id(&FacilityId::Number(99)) {
//!     Ok(facility) => println!("Selected {}", facility.name),
//!     Err(e) => println!("{e}"),
//! }
//! # Ok::<(), facility_finder::error::FacilityError>(())
//! ```
//!
//! # Matching rules
//!
//! - A facility matches when the lowercased keyword is a substring of its
//!   lowercased name. Lowercasing is full Unicode by default
//!   ([`CaseFolding::Unicode`]); ASCII-only folding can be configured.
//! - An empty keyword matches every facility. Front ends that want a blank
//!   keyword to mean "nothing searched yet" use [`EmptyKeywordPolicy::NoKeyword`].
//! - Results keep the order of the data file.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
pub mod panel;
pub mod search;

pub use crate::core::{FacilitySearcher, FacilitySearcherBuilder, SearcherInfo};

pub use config::SearchConfigBuilder;
pub use facility_finder_data as data;
pub use facility_finder_data::DataSource;
pub use panel::FacilityPanel;
pub use search::{
    CaseFolding, EmptyKeywordPolicy, SearchConfig, SearchOutcome, SelectError, search_facilities,
    select_by_id,
};

#[cfg(feature = "python")]
pub mod python;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for Facility Finder.
///
/// Installs a `tracing` subscriber that honours `RUST_LOG`, falling back to
/// `level`. Later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use facility_finder::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), facility_finder::error::FacilityError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::FacilityError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper=warn".parse()?)
            .add_directive("hyper_util=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}
