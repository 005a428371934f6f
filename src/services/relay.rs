// src/services/relay.rs

//! Chat platform relay.
//!
//! Forwards a reply to a Telegram-style bot API `sendMessage` endpoint.

use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::RelayConfig;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends replies to a chat.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    client: Client,
    endpoint: String,
}

impl ChatRelay {
    /// Build a relay from configuration.
    ///
    /// Returns `None` when the relay is disabled or has no token.
    pub fn from_config(config: &RelayConfig, client: Client) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let token = config.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let endpoint = format!(
            "{}/bot{}/sendMessage",
            config.api_base.trim_end_matches('/'),
            token
        );
        Some(Self { client, endpoint })
    }

    /// Send `text` to `chat_id`.
    pub async fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::relay(format!(
                "sendMessage to chat {chat_id} returned {status}: {body}"
            )));
        }

        log::info!("Relayed reply to chat {}", chat_id);
        Ok(())
    }
}
