use facility_finder_data::{FacilityId, FacilityRecord};

use super::SelectError;

/// Resolve the record with the given id.
///
/// An unknown id is reported as [`SelectError::NotFound`]; there is no
/// fallback record.
pub fn select_by_id<'a>(
    records: &'a [FacilityRecord],
    id: &FacilityId,
) -> Result<&'a FacilityRecord, SelectError> {
    records
        .iter()
        .find(|record| &record.id == id)
        .ok_or_else(|| SelectError::NotFound { id: id.clone() })
}
