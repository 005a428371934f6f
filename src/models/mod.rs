// src/models/mod.rs

//! Domain models for the calendar bot.

mod activity;
mod config;
mod webhook;

// Re-export all public types
pub use activity::{Activity, CalendarReport, PeriodBuckets, PeriodEntry};
pub use config::{Config, DispatchConfig, ExtractionConfig, RelayConfig, ServerConfig, SourceConfig};
pub use webhook::{Intent, OriginalRequest, QueryResult, WebhookRequest, WebhookResponse};
