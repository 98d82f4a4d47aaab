use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacilityError {
    #[error("Data error: {0}")]
    Data(#[from] facility_finder_data::DataError),
    #[error("Selection error: {0}")]
    Select(#[from] crate::search::SelectError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FacilityError>;
