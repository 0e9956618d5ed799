//! Credential signing configuration.

use serde::{Deserialize, Serialize};

/// Settings for visitor credential signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for visitor token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
        }
    }
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
