use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use axum_test::TestServer;
use facility_finder::{
    FacilitySearcher,
    data::{FacilityId, FacilityStore, TestDataConfig, test_records},
};
use facility_finder_web::{AppState, create_app, error::ErrorResponse, routes::SearchResponse};
use tower::ServiceExt;

fn app_for(store: FacilityStore) -> axum::Router {
    create_app(AppState::new(Arc::new(FacilitySearcher::from_store(store))))
}

fn test_app() -> axum::Router {
    let store = FacilityStore::from_records(test_records(&TestDataConfig::minimal()))
        .expect("minimal test data has unique ids");
    app_for(store)
}

fn create_test_server() -> TestServer {
    TestServer::new(test_app()).expect("Failed to create test server")
}

/// Data file whose ids are strings that look like numbers
fn text_id_server() -> TestServer {
    let store = FacilityStore::from_json_str(
        r#"[{"Id": "001", "facility": "Gym"}, {"Id": "7", "facility": "Pool"}]"#,
    )
    .expect("valid facility json");
    TestServer::new(app_for(store)).expect("Failed to create test server")
}

async fn post_form(body: &'static str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_index_lists_every_facility_in_dropdown() {
    let server = create_test_server();
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<option value="1">Tennis Court</option>"#));
    assert!(html.contains(r#"<option value="2">Badminton Court</option>"#));
    assert!(html.contains(r#"<option value="3">Pool</option>"#));
    assert!(html.contains("3 facilities available."));
    assert!(!html.contains("result(s) found"));
}

#[tokio::test]
async fn test_form_search_with_matches() {
    let (status, html) = post_form("keyword=court").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"Search results for "court" 2 result(s) found"#));
    assert!(html.contains("ID: 1, Facility: Tennis Court"));
    assert!(html.contains("ID: 2, Facility: Badminton Court"));
    assert!(!html.contains("ID: 3, Facility: Pool"));
}

#[tokio::test]
async fn test_form_search_without_matches() {
    let (status, html) = post_form("keyword=sauna").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"No results found for "sauna""#));
}

#[tokio::test]
async fn test_form_blank_keyword_shows_no_results_section() {
    for body in ["keyword=", "keyword=+++", ""] {
        let (status, html) = post_form(body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("result(s) found"), "body {body:?}");
        assert!(!html.contains("No results found"), "body {body:?}");
    }
}

#[tokio::test]
async fn test_select_known_id() {
    let server = create_test_server();
    let response = server.get("/select").add_query_param("id", "3").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Selected Facility: Pool"));
    assert!(html.contains("ID: 3"));
}

#[tokio::test]
async fn test_select_unknown_id_is_not_found() {
    let server = create_test_server();
    let response = server.get("/select").add_query_param("id", "99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("No facility found with ID 99"));
}

#[tokio::test]
async fn test_api_search() {
    let server = create_test_server();
    let response = server.get("/api/facilities").add_query_param("q", "COURT").await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert_eq!(body.keyword, "COURT");
    assert_eq!(body.count, 2);
    let ids: Vec<_> = body.results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![FacilityId::Number(1), FacilityId::Number(2)]);
}

#[tokio::test]
async fn test_api_search_without_keyword_lists_everything() {
    let server = create_test_server();
    let response = server.get("/api/facilities").await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert_eq!(body.count, 3);
    assert_eq!(body.results.len(), 3);
}

#[tokio::test]
async fn test_api_facility() {
    let server = create_test_server();
    let response = server.get("/api/facilities/3").await;

    response.assert_status_ok();
    let value: serde_json::Value = response.json();
    assert_eq!(value["Id"], 3);
    assert_eq!(value["facility"], "Pool");
}

#[tokio::test]
async fn test_api_facility_not_found() {
    let server = create_test_server();
    let response = server.get("/api/facilities/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(
        body,
        ErrorResponse {
            error: "No facility found with ID 99".to_string(),
            id: "99".to_string(),
        }
    );
}

#[tokio::test]
async fn test_text_ids_selectable_from_dropdown() {
    let server = text_id_server();
    let html = server.get("/").await.text();
    assert!(html.contains(r#"<option value="001">Gym</option>"#));
    assert!(html.contains(r#"<option value="7">Pool</option>"#));

    let response = server.get("/select").add_query_param("id", "001").await;
    response.assert_status_ok();
    assert!(response.text().contains("Selected Facility: Gym"));

    let response = server.get("/select").add_query_param("id", "7").await;
    response.assert_status_ok();
    assert!(response.text().contains("Selected Facility: Pool"));
}

#[tokio::test]
async fn test_text_ids_from_api() {
    let server = text_id_server();

    let response = server.get("/api/facilities/001").await;
    response.assert_status_ok();
    let value: serde_json::Value = response.json();
    assert_eq!(value["Id"], "001");
    assert_eq!(value["facility"], "Gym");

    let response = server.get("/api/facilities/7").await;
    response.assert_status_ok();
    let value: serde_json::Value = response.json();
    assert_eq!(value["facility"], "Pool");

    server
        .get("/api/facilities/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/select")
        .add_query_param("id", "1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
