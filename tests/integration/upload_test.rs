//! Integration tests for the owner upload form and settings.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use helpers::{OWNER_SECRET, TestApp, TestResponse, parse_time};

#[tokio::test]
async fn test_upload_page_requires_owner() {
    let app = TestApp::new();

    let response = app.public_get("/api/upload").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");

    let response = app
        .request("GET", "/api/upload", None, Some("not-the-secret"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_page_defaults_to_thirty_days() {
    let app = TestApp::new();

    let response = app.owner_get("/api/upload").await;
    assert_eq!(response.status, StatusCode::OK);

    let options = &response.data()["expiration_options"];
    assert_eq!(
        TestResponse::labels(options),
        vec!["1 day", "7 days", "30 days", "1 year", "Never", "Custom"]
    );
    assert_eq!(TestResponse::default_labels(options), vec!["30 days"]);

    assert_eq!(
        parse_time(&options[2]["expiration"]),
        app.now() + Duration::days(30)
    );
    assert_eq!(options[4]["expiration"], "never");
    assert!(options[5]["expiration"].is_null());
}

#[tokio::test]
async fn test_custom_admin_default_is_injected() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(serde_json::json!({ "never_expire": false, "value": 3, "unit": "days" })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["value"], 3);

    let response = app.owner_get("/api/upload").await;
    let options = &response.data()["expiration_options"];
    assert_eq!(
        TestResponse::labels(options),
        vec!["1 day", "3 days", "7 days", "30 days", "1 year", "Never", "Custom"]
    );
    assert_eq!(TestResponse::default_labels(options), vec!["3 days"]);
}

#[tokio::test]
async fn test_settings_form_shows_years() {
    let app = TestApp::new();

    app.request(
        "PUT",
        "/api/settings",
        Some(serde_json::json!({ "value": 2, "unit": "years" })),
        Some(OWNER_SECRET),
    )
    .await;

    let response = app.owner_get("/api/settings").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["never_expire"], false);
    assert_eq!(response.data()["value"], 2);
    assert_eq!(response.data()["unit"], "years");

    let response = app.owner_get("/api/upload").await;
    let options = &response.data()["expiration_options"];
    assert_eq!(TestResponse::default_labels(options), vec!["2 years"]);
}

#[tokio::test]
async fn test_settings_never_expire() {
    let app = TestApp::new();

    app.request(
        "PUT",
        "/api/settings",
        Some(serde_json::json!({ "never_expire": true, "value": 0, "unit": "days" })),
        Some(OWNER_SECRET),
    )
    .await;

    let response = app.owner_get("/api/settings").await;
    assert_eq!(response.data()["never_expire"], true);
    assert_eq!(response.data()["value"], 30);

    let response = app.owner_get("/api/upload").await;
    let options = &response.data()["expiration_options"];
    assert_eq!(TestResponse::default_labels(options), vec!["Never"]);
}

#[tokio::test]
async fn test_zero_day_default_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(serde_json::json!({ "value": 0, "unit": "days" })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_default_beyond_hundred_years_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(serde_json::json!({ "value": 101, "unit": "years" })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.owner_get("/api/settings").await;
    assert_eq!(response.data()["value"], 30);
    assert_eq!(response.data()["unit"], "days");
}
