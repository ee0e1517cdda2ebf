//! Authentication API service

use crate::client::{PublicClient, error::ClientError};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};
use broker_core::{Credentials, SessionConfig};
use reqwest::Method;
use std::rc::Rc;
use tracing::info;

/// Login and registration. A successful response establishes the session.
#[derive(Clone)]
pub struct AuthApi {
    client: PublicClient,
    credentials: Rc<dyn Credentials>,
    default_ttl_secs: i64,
}

impl AuthApi {
    pub fn new(client: PublicClient, credentials: Rc<dyn Credentials>) -> Self {
        Self {
            client,
            credentials,
            default_ttl_secs: SessionConfig::DEFAULT_TTL_SECS,
        }
    }

    /// Lifetime used when the backend omits `expires_in`
    pub fn with_default_ttl(mut self, secs: i64) -> Self {
        self.default_ttl_secs = secs;
        self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .client
            .execute(self.client.request(Method::POST, "/api/auth/login").json(&body))
            .await?;

        self.establish(&response)?;
        info!("Logged in");
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .client
            .execute(
                self.client
                    .request(Method::POST, "/api/auth/register")
                    .json(request),
            )
            .await?;

        self.establish(&response)?;
        info!("Registered new account");
        Ok(response)
    }

    /// End the session locally. There is no server-side logout endpoint.
    pub fn logout(&self) {
        self.credentials.clear();
        info!("Logged out");
    }

    fn establish(&self, response: &AuthResponse) -> Result<(), ClientError> {
        let ttl = response.expires_in.unwrap_or(self.default_ttl_secs);
        self.credentials.store(&response.token, ttl)?;
        Ok(())
    }
}
