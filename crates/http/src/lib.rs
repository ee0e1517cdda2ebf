//! HTTP layer of the brokerage admin client

pub mod client;
pub mod services;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedClient, ClientBuilder, PublicClient, UnauthorizedHook};
pub use services::{AuthApi, ChatApi, ListingApi, ProfileApi};
