//! Integration tests for the owner file and guest link indexes.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use ferry_entity::{ExpirationTime, FileLifetime, UploadCountLimit};
use helpers::{TestApp, TestResponse};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.public_get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "connected");
}

#[tokio::test]
async fn test_file_index_newest_first() {
    let app = TestApp::new();
    app.seed_entry("olderEntry", app.now() - Duration::days(2), 512, None)
        .await;
    app.seed_entry("newerEntry", app.now() - Duration::hours(1), 1536, None)
        .await;

    let response = app.owner_get("/api/files").await;
    assert_eq!(response.status, StatusCode::OK);

    let files = response.data().as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["id"], "newerEntry");
    assert_eq!(files[0]["size_label"], "1.50 kB");
    assert_eq!(files[1]["id"], "olderEntry");
    assert_eq!(files[1]["size_label"], "512 B");
    assert_eq!(files[1]["expires_label"], "2024-02-12 (28 days)");
}

#[tokio::test]
async fn test_guest_link_index() {
    let app = TestApp::new();
    app.seed_guest_link(
        "firstGuestLink01",
        ExpirationTime::At(app.now() + Duration::days(1)),
        FileLifetime::from_days(7),
        UploadCountLimit::Limited(3),
    )
    .await;
    app.clock.advance(Duration::hours(2));
    app.seed_guest_link(
        "secondGuestLink1",
        ExpirationTime::Never,
        FileLifetime::Infinite,
        UploadCountLimit::Unlimited,
    )
    .await;

    let response = app.owner_get("/api/guest-links").await;
    assert_eq!(response.status, StatusCode::OK);

    let links = response.data().as_array().unwrap();
    assert_eq!(links.len(), 2);

    assert_eq!(links[0]["id"], "secondGuestLink1");
    assert_eq!(links[0]["state"], "active");
    assert_eq!(links[0]["url_expires_label"], "Never");
    assert_eq!(links[0]["max_file_bytes_label"], "Unlimited");
    assert_eq!(links[0]["max_file_uploads_label"], "Unlimited");

    assert_eq!(links[1]["id"], "firstGuestLink01");
    assert_eq!(links[1]["max_file_uploads_label"], "3");
    assert_eq!(links[1]["files_uploaded"], 0);

    app.clock.advance(Duration::days(1));
    let response = app.owner_get("/api/guest-links").await;
    let links = response.data().as_array().unwrap();
    assert_eq!(links[1]["state"], "expired");
}

#[tokio::test]
async fn test_new_guest_link_form_defaults() {
    let app = TestApp::new();

    let response = app.owner_get("/api/guest-links/new").await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    let url_options = &data["url_expiration_options"];
    assert_eq!(
        TestResponse::labels(url_options),
        vec!["1 day", "7 days", "30 days", "1 year", "Never"]
    );
    assert_eq!(TestResponse::default_labels(url_options), vec!["Never"]);

    let lifetime_options = &data["file_lifetime_options"];
    assert_eq!(TestResponse::default_labels(lifetime_options), vec!["Never"]);
    assert_eq!(lifetime_options[1]["lifetime"]["days"], 7);
    assert_eq!(lifetime_options[4]["lifetime"], "infinite");
}

#[tokio::test]
async fn test_indexes_require_owner() {
    let app = TestApp::new();
    for path in ["/api/files", "/api/guest-links", "/api/guest-links/new", "/api/settings"] {
        let response = app.public_get(path).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}
