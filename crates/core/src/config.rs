//! Session and routing configuration

use serde::{Deserialize, Serialize};

/// Storage keys and token lifetime defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key holding the obfuscated token
    pub token_key: String,
    /// Key holding the absolute expiry in epoch milliseconds
    pub expires_key: String,
    /// Lifetime applied when the backend does not send one
    pub default_ttl_secs: i64,
}

impl SessionConfig {
    pub const DEFAULT_TOKEN_KEY: &'static str = "auth_token_v1";
    pub const DEFAULT_EXPIRES_KEY: &'static str = "auth_expires_v1";
    pub const DEFAULT_TTL_SECS: i64 = 3600;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: Self::DEFAULT_TOKEN_KEY.to_string(),
            expires_key: Self::DEFAULT_EXPIRES_KEY.to_string(),
            default_ttl_secs: Self::DEFAULT_TTL_SECS,
        }
    }
}

/// Paths the session guard redirects between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub login: String,
    pub register: String,
    /// Default landing route of the protected area
    pub landing: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            register: "/register".to_string(),
            landing: "/app/dashboard".to_string(),
        }
    }
}

impl RouteConfig {
    /// Whether `path` is one of the routes only anonymous users may enter.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn is_public_only(&self, path: &str) -> bool {
        let path = normalize_path(path);
        path == normalize_path(&self.login) || path == normalize_path(&self.register)
    }
}

/// Strip query, fragment and trailing slashes from a route path
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
