//! Error handling for the JSON API
//!
//! Errors convert into HTTP responses with a status code and a JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use facility_finder::{SelectError, data::FacilityId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown facility id (404 Not Found)
    #[error("No facility found with ID {id}")]
    NotFound { id: FacilityId },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub id: String,
}

impl From<SelectError> for ApiError {
    fn from(error: SelectError) -> Self {
        match error {
            SelectError::NotFound { id } => Self::NotFound { id },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "API request failed");
        let body = match &self {
            Self::NotFound { id } => ErrorResponse {
                error: self.to_string(),
                id: id.to_string(),
            },
        };
        (self.status_code(), Json(body)).into_response()
    }
}
