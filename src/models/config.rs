//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Inbound webhook listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Calendar page location and HTTP behavior
    #[serde(default)]
    pub source: SourceConfig,

    /// Text extraction heuristics
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Intent routing and reply texts
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Optional relay to a chat platform
    #[serde(default)]
    pub relay: RelayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using the given variable lookup.
    ///
    /// Recognized variables: `PORT`, `CALENDAR_URL`, `TELEGRAM_TOKEN`.
    /// A non-empty token also turns the relay on.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT value {:?}", port),
            }
        }

        if let Some(url) = lookup("CALENDAR_URL").filter(|u| !u.trim().is_empty()) {
            self.source.url = url.trim().to_string();
        }

        if let Some(token) = lookup("TELEGRAM_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.relay.token = Some(token.trim().to_string());
            self.relay.enabled = true;
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.source.url)
            .map_err(|e| AppError::validation(format!("source.url is invalid: {e}")))?;
        if self.dispatch.intents.iter().all(|i| i.trim().is_empty()) {
            return Err(AppError::validation("dispatch.intents is empty"));
        }
        if self.relay.enabled {
            let has_token = self
                .relay
                .token
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty());
            if !has_token {
                return Err(AppError::validation("relay is enabled without a token"));
            }
            url::Url::parse(&self.relay.api_base)
                .map_err(|e| AppError::validation(format!("relay.api_base is invalid: {e}")))?;
        }
        Ok(())
    }
}

/// Inbound webhook listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Port to bind (overridden by `PORT`)
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

/// Calendar page and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page listing the academic-calendar activities
    #[serde(default = "defaults::url")]
    pub url: String,

    /// User-Agent header for outbound requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Text extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// A digit-free fragment must be longer than this to count as a title
    #[serde(default = "defaults::min_title_chars")]
    pub min_title_chars: usize,

    /// Boilerplate phrases; fragments containing one are dropped
    #[serde(default = "defaults::denylist")]
    pub denylist: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_title_chars: defaults::min_title_chars(),
            denylist: defaults::denylist(),
        }
    }
}

/// Intent routing and canned replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Intent display names that trigger the calendar reply
    #[serde(default = "defaults::intents")]
    pub intents: Vec<String>,

    /// Words in free text that trigger the calendar reply
    #[serde(default = "defaults::keywords")]
    pub keywords: Vec<String>,

    /// Reply for anything that is not a calendar request
    #[serde(default = "defaults::fallback_text")]
    pub fallback_text: String,

    /// Reply when the calendar page cannot be processed
    #[serde(default = "defaults::error_text")]
    pub error_text: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            intents: defaults::intents(),
            keywords: defaults::keywords(),
            fallback_text: defaults::fallback_text(),
            error_text: defaults::error_text(),
        }
    }
}

/// Chat platform relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Bot API base URL
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// Bot token (usually provided via `TELEGRAM_TOKEN`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: defaults::api_base(),
            token: None,
        }
    }
}

mod defaults {
    // Server defaults
    pub fn host() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        3000
    }

    // Source defaults
    pub fn url() -> String {
        "https://www.uniquindio.edu.co/actividades-por-subcategoria/4/consulta/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Extraction defaults
    pub fn min_title_chars() -> usize {
        5
    }
    pub fn denylist() -> Vec<String> {
        vec![
            "Ir al contenido".into(),
            "Menú de accesibilidad".into(),
            "Menu de accesibilidad".into(),
            "Alto contraste".into(),
            "Aumentar texto".into(),
            "Disminuir texto".into(),
            "Restablecer".into(),
            "Mapa del sitio".into(),
            "Iniciar sesión".into(),
            "Todos los derechos reservados".into(),
            "Política de privacidad".into(),
            "Políticas de privacidad".into(),
            "Síguenos".into(),
            "Actividades por subcategoría".into(),
            "Vigilada Mineducación".into(),
        ]
    }

    // Dispatch defaults
    pub fn intents() -> Vec<String> {
        vec![
            "fechas_importantes".into(),
            "fechas importantes".into(),
            "fechas".into(),
        ]
    }
    pub fn keywords() -> Vec<String> {
        vec!["fecha".into(), "calendario".into()]
    }
    pub fn fallback_text() -> String {
        "No entiendo tu solicitud.".into()
    }
    pub fn error_text() -> String {
        "Error al acceder al sitio web.".into()
    }

    // Relay defaults
    pub fn api_base() -> String {
        "https://api.telegram.org".into()
    }
}
