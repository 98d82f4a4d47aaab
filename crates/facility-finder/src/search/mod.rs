//! Keyword search and id selection over facility records.
//!
//! Both operations are pure functions of their inputs. Search is a stable,
//! case-insensitive substring filter on the facility name; selection resolves a
//! single record by id or reports that it does not exist.

pub use error::SelectError;
mod keyword_search;
mod selection;

pub use keyword_search::{
    CaseFolding, EmptyKeywordPolicy, SearchConfig, SearchOutcome, search_facilities,
    search_facilities_folded, search_facilities_with_config,
};
pub use selection::select_by_id;

mod error {
    use facility_finder_data::FacilityId;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum SelectError {
        #[error("No facility found with ID {id}")]
        NotFound { id: FacilityId },
    }
}
