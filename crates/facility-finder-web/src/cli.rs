//! Command line interface for the `facility-finder` binary.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use facility_finder::{
    CaseFolding, DataSource, FacilityPanel, FacilitySearcher, FacilitySearcherBuilder,
    SearchConfigBuilder, SelectError,
};

/// Keyword search over a list of facilities
#[derive(Debug, Parser)]
#[command(name = "facility-finder", version, about)]
pub struct Cli {
    /// Facilities JSON file; the embedded sample data is used when omitted
    #[arg(long, env = "FACILITY_DATA_FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Minimum log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    /// Lowercasing rule for matching: unicode or ascii
    #[arg(long, default_value = "unicode", global = true)]
    pub case_folding: CaseFolding,

    /// Address the web server binds to
    #[arg(long, env = "FACILITY_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    /// Port the web server listens on
    #[arg(long, env = "FACILITY_PORT", default_value_t = 3000, global = true)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the web form and JSON API (default)
    Serve,
    /// Print facilities whose name contains KEYWORD
    Search {
        #[arg(default_value = "")]
        keyword: String,
    },
    /// Print the facility with the given ID
    Select { id: String },
}

impl Cli {
    /// The subcommand to run; `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Load the searcher for `--data`, or the embedded dataset without it.
///
/// Any load failure is returned; the binary treats it as fatal.
pub fn load_searcher(data: Option<&Path>) -> anyhow::Result<FacilitySearcher> {
    let source = data.map_or(DataSource::Embedded, |path| {
        DataSource::File(path.to_path_buf())
    });
    FacilitySearcherBuilder::new()
        .data_source(source.clone())
        .build()
        .with_context(|| format!("Failed to load facility data from {source}"))
}

/// Panel-style output of `facility-finder search`.
pub fn search_output(
    searcher: Arc<FacilitySearcher>,
    keyword: &str,
    case_folding: CaseFolding,
) -> String {
    let config = SearchConfigBuilder::new().case_folding(case_folding).build();
    let mut panel = FacilityPanel::with_config(searcher, config);
    panel.search(keyword);
    panel.to_string()
}

/// Output of `facility-finder select`, or the NotFound error.
pub fn select_output(searcher: &FacilitySearcher, id: &str) -> Result<String, SelectError> {
    let record = searcher.select_by_key(id)?;
    Ok(format!("Selected Facility: {}\nID: {}", record.name, record.id))
}
