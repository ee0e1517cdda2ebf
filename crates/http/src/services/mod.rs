//! API services used by the frontend

pub mod auth;
pub mod chat;
pub mod listings;
pub mod profile;

pub use auth::AuthApi;
pub use chat::ChatApi;
pub use listings::ListingApi;
pub use profile::ProfileApi;
