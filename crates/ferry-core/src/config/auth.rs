//! Owner authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings for the owner-only pages.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret the owner presents as a bearer token.
    pub shared_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("shared_secret", &"****")
            .finish()
    }
}
