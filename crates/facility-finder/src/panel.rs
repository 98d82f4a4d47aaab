//! Interactive search-and-select panel.
//!
//! [`FacilityPanel`] holds the display state of a notebook-style widget panel:
//! a keyword box, a status line, a results area, a dropdown of every facility
//! and a "selected" box. Each user action is an explicit method call; the
//! panel owns its display state and only reads the shared searcher.

use std::{fmt, sync::Arc};

use facility_finder_data::{FacilityId, FacilityRecord};
use itertools::Itertools;
use tracing::debug;

use crate::{
    FacilitySearcher,
    search::{SearchConfig, SelectError},
};

#[derive(Debug, Clone)]
pub struct FacilityPanel {
    searcher: Arc<FacilitySearcher>,
    config: SearchConfig,
    keyword: String,
    status: String,
    results: String,
    selected: String,
    selected_id: Option<FacilityId>,
}

impl FacilityPanel {
    pub fn new(searcher: Arc<FacilitySearcher>) -> Self {
        Self::with_config(searcher, SearchConfig::default())
    }

    /// A panel using a custom search configuration.
    pub fn with_config(searcher: Arc<FacilitySearcher>, config: SearchConfig) -> Self {
        Self {
            searcher,
            config,
            keyword: String::new(),
            status: String::new(),
            results: String::new(),
            selected: String::new(),
            selected_id: None,
        }
    }

    /// Dropdown entries, `(name, id)` for every facility in store order.
    pub fn options(&self) -> Vec<(String, FacilityId)> {
        self.searcher
            .records()
            .iter()
            .map(|record| (record.name.clone(), record.id.clone()))
            .collect()
    }

    /// Run a search and refresh the status and results areas.
    ///
    /// Returns the number of matches. With the default configuration an empty
    /// keyword lists every facility; a `NoKeyword` policy yields zero matches.
    pub fn search(&mut self, keyword: &str) -> usize {
        let searcher = Arc::clone(&self.searcher);
        let matches = searcher
            .search_with_config(keyword, &self.config)
            .into_matches();
        debug!(keyword, matches = matches.len(), "Panel search");

        self.keyword = keyword.to_owned();
        if matches.is_empty() {
            self.status = format!("No results found for \"{keyword}\"");
            self.results.clear();
        } else {
            self.status = format!(
                "Search results for \"{keyword}\" {} result(s) found",
                matches.len()
            );
            self.results = matches.iter().map(ToString::to_string).join("\n");
        }
        matches.len()
    }

    /// Select a facility by id and refresh the selected area.
    ///
    /// An unknown id clears the current selection and returns the error.
    pub fn select(&mut self, id: &FacilityId) -> Result<FacilityRecord, SelectError> {
        let searcher = Arc::clone(&self.searcher);
        match searcher.select_by_id(id) {
            Ok(record) => {
                self.selected = format!("Selected Facility: {}\nID: {}", record.name, record.id);
                self.selected_id = Some(record.id.clone());
                Ok(record.clone())
            }
            Err(e) => {
                self.selected.clear();
                self.selected_id = None;
                Err(e)
            }
        }
    }

    /// Select using raw input such as a dropdown value.
    pub fn select_key(&mut self, input: &str) -> Result<FacilityRecord, SelectError> {
        let id = self.searcher.store().resolve_id(input);
        self.select(&id)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_id(&self) -> Option<&FacilityId> {
        self.selected_id.as_ref()
    }

    pub fn searcher(&self) -> &FacilitySearcher {
        &self.searcher
    }
}

impl fmt::Display for FacilityPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [&self.status, &self.results, &self.selected];
        write!(
            f,
            "{}",
            sections.iter().filter(|s| !s.is_empty()).join("\n")
        )
    }
}
