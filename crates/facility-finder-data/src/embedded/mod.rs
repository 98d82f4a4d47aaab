use super::error::Result;
use crate::record::FacilityRecord;

// Sample dataset shipped with the library
const EMBEDDED_FACILITIES: &str = include_str!("facilities.json");

/// Load the embedded dataset that ships with the library.
///
/// A small list of sports and community facilities, used when no data file
/// is configured.
pub fn load_embedded_records() -> Result<Vec<FacilityRecord>> {
    tracing::info!("Loading embedded facility dataset");
    let records: Vec<FacilityRecord> = serde_json::from_str(EMBEDDED_FACILITIES)?;
    tracing::debug!(facilities = records.len(), "Parsed embedded facilities");
    Ok(records)
}

/// Raw JSON of the embedded dataset, for writing it out as a starter data file.
pub fn embedded_json() -> &'static str {
    EMBEDDED_FACILITIES
}
