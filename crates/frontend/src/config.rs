//! Frontend configuration

use broker_core::{RouteConfig, SessionConfig};
use web_sys::window;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session: SessionConfig,
    pub routes: RouteConfig,
}

impl AppConfig {
    /// Session validity re-check interval in milliseconds
    pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Resolve the configuration for the running page
    pub fn load() -> Self {
        Self {
            api_base_url: api_base_url(),
            session: SessionConfig::default(),
            routes: RouteConfig::default(),
        }
    }
}

/// Build-time override, else the page origin
fn api_base_url() -> String {
    if let Some(base) = option_env!("BROKER_API_BASE") {
        return base.to_string();
    }

    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
