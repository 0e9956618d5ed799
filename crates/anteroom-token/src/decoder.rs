//! Visitor token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use super::claims::QueueClaims;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No token was presented.
    Missing,
    /// The token was structurally malformed or its payload unparsable.
    Malformed,
    /// The signature did not verify against the shared secret.
    BadSignature,
    /// The signature verified but the embedded expiry has passed.
    Expired,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Malformed => write!(f, "malformed"),
            Self::BadSignature => write!(f, "bad signature"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Result of validating a presented token.
///
/// Invalid is a value, not an error: every reason collapses to "treat
/// the visitor as holding no token" in the admission flow, and is never
/// surfaced to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// Signature verified and the expiry is strictly in the future.
    Valid {
        /// The visitor's assigned queue position.
        position: i64,
        /// When the credential expires.
        expires_at: DateTime<Utc>,
    },
    /// The token is unusable; the visitor re-queues as new.
    Invalid(InvalidReason),
}

/// Validates visitor queue tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Signature validity alone is insufficient once expiry has
        // passed, with no grace window.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validates an optionally-present raw token.
    ///
    /// Pure: no side effects, same outcome for the same token at the
    /// same instant. All failure modes degrade to `Invalid`.
    pub fn verify(&self, token: Option<&str>) -> TokenOutcome {
        let Some(token) = token else {
            return TokenOutcome::Invalid(InvalidReason::Missing);
        };
        if token.is_empty() {
            return TokenOutcome::Invalid(InvalidReason::Missing);
        }

        match decode::<QueueClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => TokenOutcome::Valid {
                position: data.claims.position,
                expires_at: data.claims.expires_at(),
            },
            Err(e) => match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenOutcome::Invalid(InvalidReason::Expired),
                JwtErrorKind::InvalidSignature => {
                    TokenOutcome::Invalid(InvalidReason::BadSignature)
                }
                _ => TokenOutcome::Invalid(InvalidReason::Malformed),
            },
        }
    }
}
