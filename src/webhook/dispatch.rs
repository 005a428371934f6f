// src/webhook/dispatch.rs

//! Intent routing.

use regex::RegexSet;

use crate::error::{AppError, Result};
use crate::models::{DispatchConfig, WebhookRequest};

/// Where an inbound request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Run the calendar pipeline
    Calendar,
    /// Answer with the static fallback text
    Fallback,
}

/// Decides whether a request asks for calendar dates.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    intents: Vec<String>,
    keywords: RegexSet,
    fallback_text: String,
    error_text: String,
}

impl Dispatcher {
    pub fn new(config: &DispatchConfig) -> Result<Self> {
        let intents = config
            .intents
            .iter()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();

        let keywords = RegexSet::new(
            config
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(|k| format!("(?i){}", regex::escape(k))),
        )
        .map_err(|e| AppError::config(format!("invalid dispatch keyword: {e}")))?;

        Ok(Self {
            intents,
            keywords,
            fallback_text: config.fallback_text.clone(),
            error_text: config.error_text.clone(),
        })
    }

    /// Route by intent name first, then by keywords in the free text.
    pub fn route(&self, request: &WebhookRequest) -> Route {
        if let Some(intent) = request.intent_name() {
            let intent = intent.trim().to_lowercase();
            if self.intents.contains(&intent) {
                return Route::Calendar;
            }
        }

        match request.query_text() {
            Some(text) if self.keywords.is_match(text) => Route::Calendar,
            _ => Route::Fallback,
        }
    }

    pub fn fallback_text(&self) -> &str {
        &self.fallback_text
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(intent: Option<&str>, text: Option<&str>) -> WebhookRequest {
        serde_json::from_value(json!({
            "queryResult": {
                "queryText": text,
                "intent": { "displayName": intent }
            }
        }))
        .unwrap()
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(&DispatchConfig::default()).unwrap()
    }

    #[test]
    fn routes_known_intents() {
        let d = dispatcher();
        assert_eq!(d.route(&request(Some("fechas_importantes"), None)), Route::Calendar);
        assert_eq!(d.route(&request(Some("Fechas Importantes "), None)), Route::Calendar);
        assert_eq!(d.route(&request(Some("fechas"), Some("hola"))), Route::Calendar);
    }

    #[test]
    fn routes_keywords_in_free_text() {
        let d = dispatcher();
        let query = request(
            Some("Default Fallback Intent"),
            Some("¿Cuándo es la FECHA de matrícula?"),
        );
        assert_eq!(d.route(&query), Route::Calendar);
        assert_eq!(d.route(&request(None, Some("ver el calendario"))), Route::Calendar);
    }

    #[test]
    fn falls_back_otherwise() {
        let d = dispatcher();
        assert_eq!(d.route(&request(Some("saludo"), Some("hola"))), Route::Fallback);
        assert_eq!(d.route(&WebhookRequest::default()), Route::Fallback);
        assert_eq!(d.fallback_text(), "No entiendo tu solicitud.");
    }

    #[test]
    fn empty_keywords_never_match() {
        let config = DispatchConfig {
            keywords: vec![String::new()],
            ..DispatchConfig::default()
        };
        let d = Dispatcher::new(&config).unwrap();
        assert_eq!(d.route(&request(None, Some("fechas"))), Route::Fallback);
    }
}
