//! Facility Finder web front end
//!
//! An HTML search form with a facility dropdown, plus a small JSON API over
//! the same searcher. The loaded searcher is shared read-only by all requests.

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use facility_finder::{
    CaseFolding, EmptyKeywordPolicy, FacilitySearcher, SearchConfig, SearchConfigBuilder,
};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod cli;
pub mod error;
pub mod routes;
pub mod templates;

/// Shared request state
#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<FacilitySearcher>,
    /// Used by the HTML form: blank keyword means nothing was searched
    pub form_config: SearchConfig,
    /// Used by the JSON API: empty keyword lists every facility
    pub api_config: SearchConfig,
}

impl AppState {
    pub fn new(searcher: Arc<FacilitySearcher>) -> Self {
        Self::with_case_folding(searcher, CaseFolding::default())
    }

    pub fn with_case_folding(searcher: Arc<FacilitySearcher>, folding: CaseFolding) -> Self {
        Self {
            searcher,
            form_config: SearchConfigBuilder::form().case_folding(folding).build(),
            api_config: SearchConfigBuilder::new()
                .case_folding(folding)
                .empty_keyword(EmptyKeywordPolicy::MatchAll)
                .build(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::search_form))
        .route("/select", get(routes::select))
        .route("/api/facilities", get(routes::api_search))
        .route("/api/facilities/:id", get(routes::api_facility))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(app: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Facility Finder web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
