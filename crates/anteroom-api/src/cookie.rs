//! Queue cookie helpers.
//!
//! The visitor credential travels in a cookie named `queue`. Set-Cookie
//! values are built by hand so the attribute set is exactly the one the
//! queue page and cross-site embeds depend on: `Path=/; Secure;
//! HttpOnly; SameSite=None` plus a Max-Age.

use axum_extra::extract::cookie::CookieJar;

/// Name of the visitor credential cookie.
pub const QUEUE_COOKIE: &str = "queue";

/// Read the raw queue token from the request's cookies.
pub fn queue_token(jar: &CookieJar) -> Option<String> {
    jar.get(QUEUE_COOKIE).map(|c| c.value().to_string())
}

/// Build the Set-Cookie value carrying a freshly issued token.
pub fn set_cookie(token: &str, max_age_seconds: u64) -> String {
    format!(
        "{QUEUE_COOKIE}={token}; Path=/; Secure; HttpOnly; Max-Age={max_age_seconds}; SameSite=None"
    )
}

/// Build the Set-Cookie value that discards the visitor's token.
pub fn clear_cookie() -> String {
    format!("{QUEUE_COOKIE}=; Path=/; Secure; HttpOnly; Max-Age=0; SameSite=None")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cookie_carries_required_attributes() {
        let value = set_cookie("abc.def.ghi", 86400);
        assert!(value.starts_with("queue=abc.def.ghi;"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Secure"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Max-Age=86400"));
        assert!(value.contains("SameSite=None"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let value = clear_cookie();
        assert!(value.starts_with("queue=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
