use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use facility_finder::{SearchOutcome, SelectError, data::FacilityRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    AppState,
    error::ApiError,
    templates::{FacilityView, IndexTemplate, NotFoundTemplate, SelectedTemplate},
};

fn index_page(state: &AppState, keyword: String, results: Option<Vec<FacilityView>>) -> IndexTemplate {
    IndexTemplate {
        keyword,
        results,
        options: state.searcher.records().iter().map(FacilityView::from).collect(),
        total: state.searcher.len(),
    }
}

pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    index_page(&state, String::new(), None)
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub keyword: Option<String>,
}

/// Form submission: a missing or blank keyword renders the page without results.
pub async fn search_form(State(state): State<AppState>, Form(form): Form<SearchForm>) -> IndexTemplate {
    let keyword = form.keyword.unwrap_or_default();
    let results = match state.searcher.search_with_config(&keyword, &state.form_config) {
        SearchOutcome::Matches(matches) => {
            info!(keyword = %keyword, matches = matches.len(), "Form search");
            Some(matches.into_iter().map(FacilityView::from).collect())
        }
        SearchOutcome::NoKeyword => {
            debug!("Form submitted without a keyword");
            None
        }
    };
    index_page(&state, keyword, results)
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    pub id: String,
}

pub async fn select(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<SelectedTemplate, (StatusCode, NotFoundTemplate)> {
    match state.searcher.select_by_key(&query.id) {
        Ok(record) => Ok(SelectedTemplate {
            facility: FacilityView::from(record),
        }),
        Err(SelectError::NotFound { id }) => {
            info!(%id, "Selection failed");
            Err((
                StatusCode::NOT_FOUND,
                NotFoundTemplate { id: id.to_string() },
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiSearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub count: usize,
    pub results: Vec<FacilityRecord>,
}

/// JSON search; a missing or empty `q` returns every facility.
pub async fn api_search(
    State(state): State<AppState>,
    Query(query): Query<ApiSearchQuery>,
) -> Json<SearchResponse> {
    let keyword = query.q.unwrap_or_default();
    let results: Vec<FacilityRecord> = state
        .searcher
        .search_with_config(&keyword, &state.api_config)
        .into_matches()
        .into_iter()
        .cloned()
        .collect();
    Json(SearchResponse {
        keyword,
        count: results.len(),
        results,
    })
}

pub async fn api_facility(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FacilityRecord>, ApiError> {
    let record = state.searcher.select_by_key(&id)?;
    Ok(Json(record.clone()))
}

pub async fn health() -> &'static str {
    "OK"
}
