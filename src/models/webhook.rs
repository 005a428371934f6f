//! Conversational-agent webhook payloads.
//!
//! Every field is optional so that partial or unexpected bodies still
//! reach the dispatcher instead of being rejected at deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound fulfillment request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: Option<QueryResult>,

    /// Platform envelope (e.g. the Telegram update that triggered the query)
    #[serde(default)]
    pub original_detect_intent_request: Option<OriginalRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: Option<String>,

    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginalRequest {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub payload: Value,
}

impl WebhookRequest {
    /// Matched intent display name, if any.
    pub fn intent_name(&self) -> Option<&str> {
        self.query_result
            .as_ref()?
            .intent
            .as_ref()?
            .display_name
            .as_deref()
    }

    /// Platform that forwarded the query (e.g. `telegram`), if any.
    pub fn source(&self) -> Option<&str> {
        self.original_detect_intent_request.as_ref()?.source.as_deref()
    }

    /// Raw user text, if any.
    pub fn query_text(&self) -> Option<&str> {
        self.query_result.as_ref()?.query_text.as_deref()
    }

    /// Chat identifier carried by the platform payload.
    ///
    /// Looks at the locations used by Telegram-style updates and accepts
    /// numeric or string ids.
    pub fn chat_id(&self) -> Option<String> {
        let payload = &self.original_detect_intent_request.as_ref()?.payload;
        const PATHS: [&str; 4] = [
            "/data/chat/id",
            "/data/message/chat/id",
            "/message/chat/id",
            "/chat/id",
        ];

        PATHS
            .iter()
            .filter_map(|path| payload.pointer(path))
            .find_map(|value| match value {
                Value::Number(n) => Some(n.to_string()),
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
    }
}

/// Outbound fulfillment response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

impl WebhookResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_dialogflow_request() {
        let body = json!({
            "responseId": "abc",
            "queryResult": {
                "queryText": "¿Cuáles son las fechas?",
                "intent": { "displayName": "fechas_importantes" }
            },
            "originalDetectIntentRequest": {
                "source": "telegram",
                "payload": { "data": { "chat": { "id": 123456789 } } }
            }
        });
        let request: WebhookRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.intent_name(), Some("fechas_importantes"));
        assert_eq!(request.query_text(), Some("¿Cuáles son las fechas?"));
        assert_eq!(request.chat_id().as_deref(), Some("123456789"));
        assert_eq!(request.source(), Some("telegram"));
    }

    #[test]
    fn empty_body_is_accepted() {
        let request: WebhookRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.intent_name(), None);
        assert_eq!(request.query_text(), None);
        assert_eq!(request.chat_id(), None);
        assert_eq!(request.source(), None);
    }

    #[test]
    fn chat_id_from_nested_message_as_string() {
        let body = json!({
            "originalDetectIntentRequest": {
                "payload": { "data": { "message": { "chat": { "id": "-100200" } } } }
            }
        });
        let request: WebhookRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.chat_id().as_deref(), Some("-100200"));
    }

    #[test]
    fn response_uses_camel_case() {
        let value = serde_json::to_value(WebhookResponse::text("hola")).unwrap();
        assert_eq!(value, json!({ "fulfillmentText": "hola" }));
    }
}
