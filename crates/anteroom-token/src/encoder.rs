//! Visitor token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use anteroom_core::error::AppError;

use super::claims::QueueClaims;

/// Creates signed visitor queue tokens.
///
/// Issuance is deterministic: identical position, expiry, and secret
/// always produce the identical token. There is no issued-at claim and
/// no token ID, so a re-issued credential for the same position and
/// expiry is byte-for-byte the same.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a credential for the given queue position, expiring at
    /// `expires_at`.
    pub fn issue(&self, position: i64, expires_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = QueueClaims {
            position,
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::credential(format!("Failed to encode visitor token: {e}")))
    }
}
