//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use ferry_api::{AppState, build_app};
use ferry_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use ferry_core::traits::FixedClock;
use ferry_core::types::{EntryId, GuestLinkId};
use ferry_database::{MemoryStore, ShareStore};
use ferry_entity::{
    CreateGuestLink, DownloadRecord, ExpirationTime, FileLifetime, FileSize, GuestLink,
    UploadCountLimit, UploadMetadata, UploadSizeLimit,
};

/// Bearer token accepted as the owner in tests.
pub const OWNER_SECRET: &str = "test-owner-secret";

/// The instant every test starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Parse an RFC 3339 string from a JSON body.
pub fn parse_time(value: &Value) -> DateTime<Utc> {
    let raw = value.as_str().expect("timestamp is not a string");
    DateTime::parse_from_rfc3339(raw)
        .expect("timestamp is not RFC 3339")
        .with_timezone(&Utc)
}

/// Configuration shared by every test router
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            shared_secret: OWNER_SECRET.to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

/// Build a router over an arbitrary store at the test start time
pub fn router_with_store(store: Arc<dyn ShareStore>) -> Router {
    let clock = Arc::new(FixedClock::new(start_time()));
    build_app(AppState::new(test_config(), store, clock))
}

/// Send one request through `router`
pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let body_str = body
        .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
        .unwrap_or_default();

    let mut req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        req = req.header("Authorization", format!("Bearer {token}"));
    }

    let req = req
        .body(Body::from(body_str))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory storage behind the router
    pub store: Arc<MemoryStore>,
    /// Clock shared with the router
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Create a new test application with empty storage
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::new(start_time()));
        let state = AppState::new(test_config(), store.clone(), clock.clone());

        Self {
            router: build_app(state),
            store,
            clock,
        }
    }

    /// Current test time
    pub fn now(&self) -> DateTime<Utc> {
        use ferry_core::traits::Clock;
        self.clock.now()
    }

    /// Make a request to the test server
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        send(&self.router, method, path, body, token).await
    }

    /// GET as the owner
    pub async fn owner_get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, Some(OWNER_SECRET)).await
    }

    /// GET without credentials
    pub async fn public_get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, None).await
    }

    /// Store a guest link directly
    pub async fn seed_guest_link(
        &self,
        id: &str,
        url_expires: ExpirationTime,
        max_file_lifetime: FileLifetime,
        max_file_uploads: UploadCountLimit,
    ) -> GuestLink {
        self.store
            .insert_guest_link(&CreateGuestLink {
                id: GuestLinkId::parse(id).expect("bad guest link id"),
                label: Some(format!("link {id}")),
                created: self.now(),
                url_expires,
                max_file_lifetime,
                max_file_bytes: UploadSizeLimit::Unlimited,
                max_file_uploads,
            })
            .await
            .expect("Failed to seed guest link")
    }

    /// Store an entry directly
    pub async fn seed_entry(
        &self,
        id: &str,
        uploaded: DateTime<Utc>,
        size: u64,
        guest_link_id: Option<&GuestLinkId>,
    ) -> UploadMetadata {
        let entry = UploadMetadata {
            id: EntryId::parse(id).expect("bad entry id"),
            filename: format!("{id}.bin"),
            content_type: "application/octet-stream".to_string(),
            note: None,
            uploaded,
            expires: ExpirationTime::At(uploaded + Duration::days(30)),
            size: FileSize(size),
            guest_link_id: guest_link_id.cloned(),
        };
        self.store
            .insert_entry(&entry)
            .await
            .expect("Failed to seed entry");
        entry
    }

    /// Record a download directly
    pub async fn seed_download(
        &self,
        entry: &UploadMetadata,
        time: DateTime<Utc>,
        client_ip: &str,
        user_agent: &str,
    ) {
        self.store
            .record_download(&entry.id, &DownloadRecord::new(time, client_ip, user_agent))
            .await
            .expect("Failed to seed download");
    }
}

/// Test response wrapper
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success response
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Labels of an option list
    pub fn labels(options: &Value) -> Vec<String> {
        options
            .as_array()
            .expect("options is not an array")
            .iter()
            .map(|o| o["label"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Labels of the options marked default
    pub fn default_labels(options: &Value) -> Vec<String> {
        options
            .as_array()
            .expect("options is not an array")
            .iter()
            .filter(|o| o["is_default"] == true)
            .map(|o| o["label"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
