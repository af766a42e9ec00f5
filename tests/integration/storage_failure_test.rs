//! Integration tests for storage failures surfacing as opaque 500s.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Duration;

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_core::types::{EntryId, GuestLinkId};
use ferry_database::{MemoryStore, ShareStore};
use ferry_entity::{
    CreateGuestLink, DownloadRecord, ExpirationTime, FileSize, GuestLink, Settings,
    UploadMetadata,
};
use helpers::{OWNER_SECRET, router_with_store, send, start_time};

/// A store whose reads of settings, guest links and downloads fail.
#[derive(Debug, Default)]
struct BrokenStore {
    inner: MemoryStore,
}

fn unavailable() -> AppError {
    AppError::database("connection reset by peer (10.1.2.3:5432)")
}

#[async_trait]
impl ShareStore for BrokenStore {
    async fn get_guest_link(&self, _id: &GuestLinkId) -> AppResult<Option<GuestLink>> {
        Err(unavailable())
    }

    async fn get_guest_links(&self) -> AppResult<Vec<GuestLink>> {
        self.inner.get_guest_links().await
    }

    async fn insert_guest_link(&self, data: &CreateGuestLink) -> AppResult<GuestLink> {
        self.inner.insert_guest_link(data).await
    }

    async fn read_settings(&self) -> AppResult<Settings> {
        Err(unavailable())
    }

    async fn update_settings(&self, settings: &Settings) -> AppResult<()> {
        self.inner.update_settings(settings).await
    }

    async fn get_entry_metadata(&self, id: &EntryId) -> AppResult<Option<UploadMetadata>> {
        self.inner.get_entry_metadata(id).await
    }

    async fn get_entries_metadata(&self) -> AppResult<Vec<UploadMetadata>> {
        self.inner.get_entries_metadata().await
    }

    async fn insert_entry(&self, entry: &UploadMetadata) -> AppResult<()> {
        self.inner.insert_entry(entry).await
    }

    async fn get_entry_downloads(&self, _id: &EntryId) -> AppResult<Vec<DownloadRecord>> {
        Err(unavailable())
    }

    async fn record_download(&self, id: &EntryId, record: &DownloadRecord) -> AppResult<()> {
        self.inner.record_download(id, record).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(unavailable())
    }
}

async fn broken_router() -> axum::Router {
    let store = BrokenStore::default();
    let uploaded = start_time() - Duration::days(1);
    store
        .insert_entry(&UploadMetadata {
            id: EntryId::parse("storedFile").unwrap(),
            filename: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            note: None,
            uploaded,
            expires: ExpirationTime::At(uploaded + Duration::days(30)),
            size: FileSize(4096),
            guest_link_id: None,
        })
        .await
        .unwrap();
    router_with_store(Arc::new(store))
}

fn assert_opaque_failure(response: &helpers::TestResponse) {
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "Internal server error");
    assert!(response.body.get("data").is_none());
    assert!(!response.body.to_string().contains("10.1.2.3"));
}

#[tokio::test]
async fn test_upload_page_fails_when_settings_unreadable() {
    let router = broken_router().await;
    let response = send(&router, "GET", "/api/upload", None, Some(OWNER_SECRET)).await;
    assert_opaque_failure(&response);

    let response = send(&router, "GET", "/api/settings", None, Some(OWNER_SECRET)).await;
    assert_opaque_failure(&response);
}

#[tokio::test]
async fn test_guest_page_fails_when_link_unreadable() {
    let router = broken_router().await;
    let response = send(&router, "GET", "/api/g/anyGuestLink0000", None, None).await;
    assert_opaque_failure(&response);
}

#[tokio::test]
async fn test_downloads_fail_when_history_unreadable() {
    let router = broken_router().await;

    let response = send(
        &router,
        "GET",
        "/api/files/storedFile/downloads?unique=true",
        None,
        Some(OWNER_SECRET),
    )
    .await;
    assert_opaque_failure(&response);

    let response = send(&router, "GET", "/api/files/storedFile", None, Some(OWNER_SECRET)).await;
    assert_opaque_failure(&response);
}

#[tokio::test]
async fn test_health_reports_degraded() {
    let router = broken_router().await;
    let response = send(&router, "GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(response.body["data"]["database"], "unavailable");
}
