//! Guest link service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::{Validate, ValidationError};

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_core::types::GuestLinkId;
use ferry_database::ShareStore;
use ferry_entity::{
    CreateGuestLink, ExpirationTime, FileLifetime, GuestLink, GuestLinkState, UploadCountLimit,
    UploadSizeLimit,
};

use super::form::GuestLinkForm;
use super::gate::{
    GuestUploadPage, check_upload_expiration, check_upload_size, ensure_active, evaluate,
};

/// Request to create a guest link.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGuestLinkRequest {
    /// Optional owner-facing label.
    #[serde(default)]
    #[validate(length(max = 200, message = "Label must be at most 200 characters"))]
    pub label: Option<String>,
    /// When the link stops working.
    #[serde(default = "never")]
    pub url_expires: ExpirationTime,
    /// Upper bound on the lifetime uploaders may choose.
    #[validate(custom(function = "validate_max_file_lifetime"))]
    pub max_file_lifetime: FileLifetime,
    /// Per-file size limit in bytes (None = unlimited).
    #[serde(default)]
    #[validate(range(min = 1, message = "Size limit must be positive"))]
    pub max_file_bytes: Option<u64>,
    /// Upload count limit (None = unlimited).
    #[serde(default)]
    #[validate(range(min = 1, message = "Upload limit must be positive"))]
    pub max_file_uploads: Option<u32>,
}

fn never() -> ExpirationTime {
    ExpirationTime::Never
}

fn validate_max_file_lifetime(lifetime: &FileLifetime) -> Result<(), ValidationError> {
    lifetime.check_configurable().map_err(|reason| {
        ValidationError::new("max_file_lifetime")
            .with_message(format!("Maximum file {reason}").into())
    })
}

/// A guest link as listed on the owner's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestLinkSummary {
    /// The link.
    #[serde(flatten)]
    pub guest_link: GuestLink,
    /// Its state at the time of listing.
    pub state: GuestLinkState,
}

/// Serves guest link pages and manages guest links.
#[derive(Debug, Clone)]
pub struct GuestLinkService {
    /// Storage surface.
    store: Arc<dyn ShareStore>,
}

impl GuestLinkService {
    /// Creates a new guest link service.
    pub fn new(store: Arc<dyn ShareStore>) -> Self {
        Self { store }
    }

    /// Fetches a guest link, failing with NotFound when it does not exist.
    pub async fn get(&self, id: &GuestLinkId) -> AppResult<GuestLink> {
        self.store
            .get_guest_link(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Guest link {id} not found")))
    }

    /// Builds the page shown to a visitor of a guest link.
    pub async fn upload_page(&self, id: &GuestLinkId, now: DateTime<Utc>) -> AppResult<GuestUploadPage> {
        let link = self.get(id).await?;
        Ok(evaluate(link, now))
    }

    /// Admits an upload of `bytes` bytes expiring at `requested` through a
    /// guest link, returning the link it was admitted under.
    ///
    /// The link's state is re-read from storage so a link that expired or
    /// filled up since its page was rendered refuses the upload.
    pub async fn authorize_upload(
        &self,
        id: &GuestLinkId,
        requested: ExpirationTime,
        bytes: u64,
        now: DateTime<Utc>,
    ) -> AppResult<GuestLink> {
        let link = self.get(id).await?;
        ensure_active(&link, now)?;
        check_upload_size(&link, bytes)?;
        check_upload_expiration(&link, requested, now)?;

        debug!(guest_link_id = %id, bytes, expires = %requested, "Guest upload admitted");
        Ok(link)
    }

    /// Lists guest links, newest created first.
    pub async fn list(&self, now: DateTime<Utc>) -> AppResult<Vec<GuestLinkSummary>> {
        let mut links = self.store.get_guest_links().await?;
        links.sort_by(|a, b| b.created.cmp(&a.created));

        Ok(links
            .into_iter()
            .map(|guest_link| GuestLinkSummary {
                state: guest_link.state(now),
                guest_link,
            })
            .collect())
    }

    /// Choices for the new-guest-link form.
    pub fn new_form(&self, now: DateTime<Utc>) -> GuestLinkForm {
        GuestLinkForm::build(now)
    }

    /// Validates and stores a new guest link.
    pub async fn create(&self, req: CreateGuestLinkRequest, now: DateTime<Utc>) -> AppResult<GuestLink> {
        req.validate()
            .map_err(|e| AppError::validation(format!("Invalid guest link: {e}")))?;

        if req.url_expires.has_passed(now) {
            return Err(AppError::validation(
                "Guest link expiration must be in the future",
            ));
        }

        let label = req
            .label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let data = CreateGuestLink {
            id: GuestLinkId::generate(),
            label,
            created: now,
            url_expires: req.url_expires,
            max_file_lifetime: req.max_file_lifetime,
            max_file_bytes: UploadSizeLimit::from(req.max_file_bytes),
            max_file_uploads: UploadCountLimit::from(req.max_file_uploads),
        };

        let link = self.store.insert_guest_link(&data).await?;

        info!(
            guest_link_id = %link.id,
            max_file_lifetime = %link.max_file_lifetime,
            url_expires = %link.url_expires,
            "Guest link created"
        );

        Ok(link)
    }
}
