// src/webhook/mod.rs

//! Webhook server for the conversational-agent platform.
//!
//! `POST /webhook` answers fulfillment requests with calendar dates (or the
//! fallback text) and optionally relays the reply to the chat the request
//! came from. `GET /health` is a liveness probe.

mod dispatch;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::error::{AppError, Result};
use crate::models::{Config, ServerConfig, WebhookRequest, WebhookResponse};
use crate::pipeline::run_calendar;
use crate::services::{ChatRelay, current_year};
use crate::utils::http::create_async_client;

pub use dispatch::{Dispatcher, Route};

/// State shared by all requests.
pub struct AppState {
    config: Config,
    client: Client,
    dispatcher: Dispatcher,
    relay: Option<ChatRelay>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = create_async_client(&config.source)?;
        let dispatcher = Dispatcher::new(&config.dispatch)?;
        let relay = ChatRelay::from_config(&config.relay, client.clone());

        Ok(Self {
            config,
            client,
            dispatcher,
            relay,
        })
    }

    /// Produce the reply for one request.
    pub async fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        let route = self.dispatcher.route(request);
        log::info!(
            "Webhook request: source={:?}, intent={:?}, route={:?}",
            request.source(),
            request.intent_name(),
            route
        );

        if route == Route::Fallback {
            return WebhookResponse::text(self.dispatcher.fallback_text());
        }

        let start = Instant::now();
        let text = match run_calendar(&self.config, &self.client, current_year()).await {
            Ok(report) => {
                log::info!(
                    "Calendar reply built: {} periods, {} entries in {}ms",
                    report.periods.len(),
                    report.entry_count(),
                    start.elapsed().as_millis()
                );
                report.text
            }
            Err(e) => {
                log::error!("Calendar pipeline failed: {}", e);
                return WebhookResponse::text(self.dispatcher.error_text());
            }
        };

        if let (Some(relay), Some(chat_id)) = (&self.relay, request.chat_id()) {
            if let Err(e) = relay.send(&chat_id, &text).await {
                log::warn!("Relay to chat {} failed: {}", chat_id, e);
            }
        }

        WebhookResponse::text(text)
    }
}

/// Build the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let listener = bind(&config.server).await?;
    let state = Arc::new(AppState::new(config)?);
    log::info!("Webhook server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Webhook server stopped");
    Ok(())
}

/// Bind the listener; `host` may be an IP literal or a hostname.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            AppError::config(format!(
                "cannot listen on {}:{}: {e}",
                config.host, config.port
            ))
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<WebhookResponse> {
    let request = serde_json::from_slice::<WebhookRequest>(&body).unwrap_or_else(|e| {
        log::warn!("Malformed webhook body ({} bytes): {}", body.len(), e);
        WebhookRequest::default()
    });

    Json(state.handle(&request).await)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
