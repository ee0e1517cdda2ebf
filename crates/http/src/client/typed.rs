//! Clients that make the authentication requirement part of the type

use super::error::ClientError;
use super::send_json;
use broker_core::Credentials;
use reqwest::Client;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Called after a 401 has cleared the credential, e.g. to navigate to login
pub type UnauthorizedHook = Rc<dyn Fn()>;

/// Client for public endpoints (login, register)
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

impl PublicClient {
    pub(crate) fn from_parts(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        send_json(request).await
    }

    /// Derive a client that attaches the current credential to each request
    pub fn authenticate(&self, credentials: Rc<dyn Credentials>) -> AuthenticatedClient {
        AuthenticatedClient {
            inner: self.clone(),
            credentials,
            on_unauthorized: None,
        }
    }
}

/// Client for endpoints that require a bearer token.
///
/// The token is read from [`Credentials`] per request, so a logout or expiry
/// takes effect immediately. A 401 response clears the credential and fires
/// the unauthorized hook before the error is returned.
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: PublicClient,
    credentials: Rc<dyn Credentials>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.inner.base_url)
            .field("has_unauthorized_hook", &self.on_unauthorized.is_some())
            .finish_non_exhaustive()
    }
}

impl AuthenticatedClient {
    /// Set the reaction to authorization failures
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Create a request builder with authentication.
    ///
    /// Fails without touching the network when no valid credential exists.
    pub fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let token = self
            .credentials
            .token()
            .ok_or(ClientError::NotAuthenticated)?;
        Ok(self.inner.request(method, path).bearer_auth(token))
    }

    /// Execute a request and react to authorization failures
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        match send_json(request).await {
            Err(error) if error.is_auth_failure() => {
                warn!("Backend rejected credential, ending session");
                self.credentials.clear();
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
                Err(error)
            }
            result => result,
        }
    }

    /// Build and execute a request in one step
    pub async fn send<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let request = self.request(method, path)?;
        self.execute(request).await
    }
}
