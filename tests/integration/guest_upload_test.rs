//! Integration tests for the public guest upload page and guest link creation.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use ferry_entity::{ExpirationTime, FileLifetime, UploadCountLimit};
use helpers::{OWNER_SECRET, TestApp, TestResponse, parse_time};

#[tokio::test]
async fn test_active_link_offers_bounded_options() {
    let app = TestApp::new();
    app.seed_guest_link(
        "weeklyGuestLink1",
        ExpirationTime::Never,
        FileLifetime::from_days(7),
        UploadCountLimit::Unlimited,
    )
    .await;

    let response = app.public_get("/api/g/weeklyGuestLink1").await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["active"], true);
    assert_eq!(data["guest_link"]["id"], "weeklyGuestLink1");

    let options = &data["expiration_options"];
    assert_eq!(TestResponse::labels(options), vec!["1 day", "7 days"]);
    assert_eq!(TestResponse::default_labels(options), vec!["7 days"]);
    assert_eq!(
        parse_time(&options[1]["expiration"]),
        app.now() + Duration::days(7)
    );
}

#[tokio::test]
async fn test_infinite_bound_offers_never() {
    let app = TestApp::new();
    app.seed_guest_link(
        "foreverGuestLink",
        ExpirationTime::Never,
        FileLifetime::Infinite,
        UploadCountLimit::Unlimited,
    )
    .await;

    let response = app.public_get("/api/g/foreverGuestLink").await;
    let options = &response.data()["expiration_options"];
    assert_eq!(
        TestResponse::labels(options),
        vec!["1 day", "7 days", "30 days", "1 year", "Never"]
    );
    assert_eq!(TestResponse::default_labels(options), vec!["Never"]);
}

#[tokio::test]
async fn test_link_goes_inactive_when_clock_passes_expiration() {
    let app = TestApp::new();
    app.seed_guest_link(
        "shortLivedLink01",
        ExpirationTime::At(app.now() + Duration::hours(1)),
        FileLifetime::from_days(30),
        UploadCountLimit::Unlimited,
    )
    .await;

    let response = app.public_get("/api/g/shortLivedLink01").await;
    assert_eq!(response.data()["active"], true);

    app.clock.advance(Duration::hours(1));

    let response = app.public_get("/api/g/shortLivedLink01").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["active"], false);
    assert_eq!(response.data()["state"], "expired");
    assert!(response.data().get("expiration_options").is_none());
}

#[tokio::test]
async fn test_exhausted_link_is_inactive() {
    let app = TestApp::new();
    let link = app
        .seed_guest_link(
            "singleUseLink001",
            ExpirationTime::Never,
            FileLifetime::from_days(7),
            UploadCountLimit::Limited(1),
        )
        .await;

    let response = app.public_get("/api/g/singleUseLink001").await;
    assert_eq!(response.data()["active"], true);

    app.seed_entry("guestfile1", app.now(), 100, Some(&link.id))
        .await;

    let response = app.public_get("/api/g/singleUseLink001").await;
    assert_eq!(response.data()["active"], false);
    assert_eq!(response.data()["state"], "exhausted");
}

#[tokio::test]
async fn test_unknown_link_is_not_found() {
    let app = TestApp::new();
    let response = app.public_get("/api/g/doesNotExist0000").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_link_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.public_get("/api/g/short").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.public_get("/api/g/has-punctuation!").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_guest_link_then_visit() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/guest-links",
            Some(serde_json::json!({
                "label": "Photos from the trip",
                "max_file_lifetime": { "days": 30 },
                "max_file_uploads": 5
            })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let id = response.data()["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 16);
    assert_eq!(response.data()["url_expires"], "never");
    assert_eq!(response.data()["files_uploaded"], 0);

    let response = app.public_get(&format!("/api/g/{id}")).await;
    let options = &response.data()["expiration_options"];
    assert_eq!(
        TestResponse::labels(options),
        vec!["1 day", "7 days", "30 days"]
    );
    assert_eq!(TestResponse::default_labels(options), vec!["30 days"]);
}

#[tokio::test]
async fn test_create_guest_link_validation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/guest-links",
            Some(serde_json::json!({ "max_file_lifetime": { "days": 0 } })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/guest-links",
            Some(serde_json::json!({ "max_file_lifetime": "infinite", "max_file_uploads": 0 })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/guest-links",
            Some(serde_json::json!({ "max_file_lifetime": { "days": 2_000_000_000u32 } })),
            Some(OWNER_SECRET),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/guest-links",
            Some(serde_json::json!({ "max_file_lifetime": "infinite" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
