//! Route authorization between the public and protected areas

use super::credentials::Credentials;
use crate::config::RouteConfig;
use tracing::debug;

/// Outcome of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed(String),
    Redirect(String),
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    /// The route navigation ends up on
    pub fn target(&self) -> &str {
        match self {
            Self::Proceed(route) | Self::Redirect(route) => route,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Navigation guard.
///
/// Every decision re-reads the credential, so an expiry takes effect on the
/// very next navigation. Decisions never fail: unreadable credentials count
/// as anonymous.
#[derive(Debug, Clone)]
pub struct SessionGuard<T> {
    credentials: T,
    routes: RouteConfig,
}

impl<T: Credentials> SessionGuard<T> {
    pub fn new(credentials: T) -> Self {
        Self::with_routes(credentials, RouteConfig::default())
    }

    pub fn with_routes(credentials: T, routes: RouteConfig) -> Self {
        Self {
            credentials,
            routes,
        }
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.routes
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.token().is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Gate for any route inside the protected area
    pub fn guard_protected_route(&self, target: &str) -> Decision {
        if self.is_authenticated() {
            Decision::Proceed(target.to_string())
        } else {
            debug!(target, "Anonymous navigation to protected route");
            Decision::Redirect(self.routes.login.clone())
        }
    }

    /// Gate for routes only anonymous users may enter (login, register)
    pub fn guard_public_only_route(&self, target: &str) -> Decision {
        if self.routes.is_public_only(target) && self.is_authenticated() {
            debug!(target, "Authenticated navigation to public-only route");
            Decision::Redirect(self.routes.landing.clone())
        } else {
            Decision::Proceed(target.to_string())
        }
    }

    /// React to an authorization failure reported by the backend.
    ///
    /// Drops the credential and sends the user to login unless they are
    /// already on a public-only route.
    pub fn on_authorization_failure(&self, current_route: &str) -> Decision {
        self.credentials.clear();
        if self.routes.is_public_only(current_route) {
            Decision::Proceed(current_route.to_string())
        } else {
            Decision::Redirect(self.routes.login.clone())
        }
    }
}
