//! Page components

mod auth;
mod chat;
mod listings;
mod profile;
mod shell;
mod widgets;

pub use auth::{LoginPage, RegisterPage};
pub use chat::ChatWidget;
pub use listings::{MortgageList, RealEstateList, RentalList};
pub use profile::ProfilePage;
pub use shell::{Dashboard, NotFound, Shell};

use broker_http::ClientError;

/// Convert client errors to messages shown to the user
pub fn user_message(error: &ClientError) -> String {
    match error {
        ClientError::AuthenticationFailed(_) => "Invalid email or password".to_string(),
        ClientError::NotAuthenticated => "Please sign in again".to_string(),
        ClientError::Request(_) => "Could not reach the server".to_string(),
        other => other.to_string(),
    }
}
