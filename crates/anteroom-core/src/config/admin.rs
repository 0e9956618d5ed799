//! Admin interface configuration.

use serde::{Deserialize, Serialize};

/// Settings for the manual queue-control interface.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Path prefix for the admin interface and API, e.g. `"/_queue"`.
    /// `None` disables the admin interface entirely.
    #[serde(default)]
    pub path: Option<String>,
    /// Password requested via HTTP Basic Auth with the username `admin`
    /// when the admin path is accessed.
    ///
    /// `None` disables Basic Auth (not recommended — anybody who can
    /// reach the path could then skip the queue).
    #[serde(default)]
    pub password: Option<String>,
}

impl AdminConfig {
    /// Whether the admin interface is enabled.
    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }
}
