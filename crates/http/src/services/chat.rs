//! AI assistant proxy

use crate::client::{AuthenticatedClient, error::ClientError};
use crate::types::{ChatReply, ChatRequest};
use reqwest::Method;

/// Forwards free-text messages to the backend assistant
#[derive(Clone, Debug)]
pub struct ChatApi {
    client: AuthenticatedClient,
}

impl ChatApi {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Send one message and return the assistant's reply
    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::BadRequest("Message must not be empty".into()));
        }

        let body = ChatRequest {
            message: message.to_string(),
        };
        let reply: ChatReply = self
            .client
            .execute(self.client.request(Method::POST, "/api/chat")?.json(&body))
            .await?;
        Ok(reply.reply)
    }
}
