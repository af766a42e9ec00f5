//! Integration tests for download history views.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use helpers::{TestApp, parse_time};

const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

async fn seeded() -> TestApp {
    let app = TestApp::new();
    let start = app.now() - Duration::days(3);
    let entry = app.seed_entry("dlEntry001", start, 2048, None).await;

    app.seed_download(&entry, start + Duration::hours(1), "10.0.0.1", FIREFOX)
        .await;
    app.seed_download(&entry, start + Duration::hours(2), "10.0.0.2", FIREFOX)
        .await;
    app.seed_download(&entry, start + Duration::hours(3), "10.0.0.1", FIREFOX)
        .await;
    app
}

fn numbers(downloads: &serde_json::Value) -> Vec<u64> {
    downloads
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["number"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_full_history_newest_first() {
    let app = seeded().await;

    let response = app.owner_get("/api/files/dlEntry001/downloads").await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["unique"], false);
    assert_eq!(data["total_downloads"], 3);
    assert_eq!(numbers(&data["downloads"]), vec![3, 2, 1]);

    let downloads = data["downloads"].as_array().unwrap();
    assert_eq!(downloads[0]["client_ip"], "10.0.0.1");
    assert_eq!(downloads[1]["client_ip"], "10.0.0.2");
    assert!(parse_time(&downloads[0]["time"]) > parse_time(&downloads[1]["time"]));
    assert_eq!(downloads[0]["browser"], "Firefox");
    assert_eq!(downloads[0]["platform"], "Linux");
}

#[tokio::test]
async fn test_unique_history_keeps_latest_per_client() {
    let app = seeded().await;

    let response = app
        .owner_get("/api/files/dlEntry001/downloads?unique=true")
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["unique"], true);
    assert_eq!(data["total_downloads"], 3);
    assert_eq!(numbers(&data["downloads"]), vec![2, 1]);

    let downloads = data["downloads"].as_array().unwrap();
    assert_eq!(downloads[0]["client_ip"], "10.0.0.1");
    assert_eq!(downloads[1]["client_ip"], "10.0.0.2");
    assert_eq!(
        parse_time(&downloads[0]["time"]),
        app.now() - Duration::days(3) + Duration::hours(3)
    );
}

#[tokio::test]
async fn test_entry_without_downloads() {
    let app = TestApp::new();
    app.seed_entry("quietEntry", app.now(), 10, None).await;

    let response = app
        .owner_get("/api/files/quietEntry/downloads?unique=true")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_downloads"], 0);
    assert!(response.data()["downloads"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_file_info_counts_downloads() {
    let app = seeded().await;

    let response = app.owner_get("/api/files/dlEntry001").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["download_count"], 3);
    assert_eq!(response.data()["entry"]["id"], "dlEntry001");
}

#[tokio::test]
async fn test_unknown_or_malformed_entry() {
    let app = seeded().await;

    let response = app.owner_get("/api/files/missing000/downloads").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.owner_get("/api/files/bad!id/downloads").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.public_get("/api/files/dlEntry001/downloads").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
