//! Current user endpoint

use crate::client::{AuthenticatedClient, error::ClientError};
use broker_core::UserProfile;
use reqwest::Method;

/// Profile of the signed-in user
#[derive(Clone, Debug)]
pub struct ProfileApi {
    client: AuthenticatedClient,
}

impl ProfileApi {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        self.client.send(Method::GET, "/api/users/me").await
    }
}
