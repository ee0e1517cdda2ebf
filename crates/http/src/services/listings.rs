//! Real estate, rental and mortgage listings

use crate::client::{AuthenticatedClient, error::ClientError};
use crate::types::{Mortgage, RealEstate, Rental};
use reqwest::Method;

#[derive(Clone, Debug)]
pub struct ListingApi {
    client: AuthenticatedClient,
}

impl ListingApi {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    pub async fn real_estate(&self) -> Result<Vec<RealEstate>, ClientError> {
        self.client.send(Method::GET, "/api/real-estate").await
    }

    pub async fn rentals(&self) -> Result<Vec<Rental>, ClientError> {
        self.client.send(Method::GET, "/api/rentals").await
    }

    pub async fn mortgages(&self) -> Result<Vec<Mortgage>, ClientError> {
        self.client.send(Method::GET, "/api/mortgages").await
    }
}
