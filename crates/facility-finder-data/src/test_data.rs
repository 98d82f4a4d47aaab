use std::io::Write;

use tempfile::NamedTempFile;
use tracing::info;

use super::error::Result;
use crate::record::FacilityRecord;

const SAMPLE_FACILITIES: &[(&str, &str)] = &[
    ("Tennis Court", "North Park"),
    ("Badminton Court", "Sports Hall"),
    ("Pool", "Aquatics Centre"),
    ("Squash Court", "Sports Hall"),
    ("Gymnasium", "Sports Hall"),
    ("Table Tennis Room", "Community Centre"),
    ("Climbing Wall", "Sports Hall"),
    ("Meeting Room", "Community Centre"),
    ("Dance Studio", "Arts Block"),
    ("Hydrotherapy Pool", "Aquatics Centre"),
];

/// Configuration for test data generation
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    /// Number of facility records to generate
    pub rows: usize,
    /// Whether to attach pass-through attributes to each record
    pub with_attributes: bool,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self::sample()
    }
}

impl TestDataConfig {
    /// Tennis Court, Badminton Court and Pool with ids 1..=3 and no attributes
    pub fn minimal() -> Self {
        Self {
            rows: 3,
            with_attributes: false,
        }
    }

    /// Sample data for integration tests
    pub fn sample() -> Self {
        Self {
            rows: 25,
            with_attributes: true,
        }
    }
}

/// Generate test records with sequential ids starting at 1.
///
/// Names cycle through a fixed list; rows past the first cycle get a numeric
/// suffix so names stay distinct.
pub fn test_records(config: &TestDataConfig) -> Vec<FacilityRecord> {
    (0..config.rows)
        .map(|i| {
            let (name, location) = SAMPLE_FACILITIES[i % SAMPLE_FACILITIES.len()];
            let cycle = i / SAMPLE_FACILITIES.len();
            let name = if cycle == 0 {
                name.to_string()
            } else {
                format!("{name} {}", cycle + 1)
            };
            let id = i64::try_from(i + 1).unwrap_or(i64::MAX);
            let record = FacilityRecord::new(id, name);
            if config.with_attributes {
                record
                    .with_attribute("location", location)
                    .with_attribute("capacity", (i % 5 + 1) * 4)
            } else {
                record
            }
        })
        .collect()
}

/// Create a facility JSON file in a temporary file.
pub fn create_test_data(config: &TestDataConfig) -> Result<NamedTempFile> {
    info!("Creating test data with config: {:?}", config);

    let mut file = NamedTempFile::new()?;
    serde_json::to_writer_pretty(&mut file, &test_records(config))?;
    file.flush()?;

    Ok(file)
}
