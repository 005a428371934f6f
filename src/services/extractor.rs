// src/services/extractor.rs

//! Visible-text extraction.
//!
//! Walks the text nodes of a document in order and returns the trimmed,
//! whitespace-normalized fragments that survive the boilerplate denylist.

use regex::RegexSet;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::ExtractionConfig;
use crate::utils::normalize_whitespace;

/// Elements whose text is never visible.
const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

/// Service that turns an HTML page into ordered text fragments.
pub struct TextExtractor {
    denylist: RegexSet,
}

impl TextExtractor {
    /// Create an extractor from the configured denylist.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let patterns = config
            .denylist
            .iter()
            .map(|phrase| normalize_whitespace(phrase))
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| format!("(?i){}", regex::escape(&phrase)));

        let denylist = RegexSet::new(patterns)
            .map_err(|e| AppError::config(format!("invalid denylist: {e}")))?;

        Ok(Self { denylist })
    }

    /// Extract fragments from raw HTML.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    /// Extract fragments from a parsed document.
    pub fn extract_document(&self, document: &Html) -> Vec<String> {
        let root = Self::body(document).unwrap_or_else(|| document.root_element());

        root.descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
                });
                if hidden {
                    return None;
                }

                let fragment = normalize_whitespace(text);
                if fragment.is_empty() || self.is_boilerplate(&fragment) {
                    None
                } else {
                    Some(fragment)
                }
            })
            .collect()
    }

    /// Whether a fragment matches a denylist phrase.
    pub fn is_boilerplate(&self, fragment: &str) -> bool {
        self.denylist.is_match(fragment)
    }

    fn body(document: &Html) -> Option<ElementRef<'_>> {
        let selector = Selector::parse("body").ok()?;
        document.select(&selector).next()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            denylist: RegexSet::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(denylist: &[&str]) -> TextExtractor {
        let config = ExtractionConfig {
            denylist: denylist.iter().map(|s| s.to_string()).collect(),
            ..ExtractionConfig::default()
        };
        TextExtractor::new(&config).unwrap()
    }

    #[test]
    fn extracts_text_nodes_in_document_order() {
        let html = r#"
            <html><head><title>Calendario</title></head>
            <body>
              <h2>Inicio de clases</h2>
              <p><span>9 de febrero</span> <strong>2026-1</strong></p>
              <div>  Cierre   de notas </div>
            </body></html>"#;

        let fragments = TextExtractor::default().extract(html);
        assert_eq!(
            fragments,
            vec!["Inicio de clases", "9 de febrero", "2026-1", "Cierre de notas"]
        );
    }

    #[test]
    fn skips_scripts_and_styles() {
        let html = r#"<body>
            <script>var fecha = "2026";</script>
            <style>.x { width: 10px }</style>
            <noscript>Activa JavaScript</noscript>
            <p>Matrículas ordinarias</p>
        </body>"#;

        let fragments = TextExtractor::default().extract(html);
        assert_eq!(fragments, vec!["Matrículas ordinarias"]);
    }

    #[test]
    fn drops_denylisted_fragments_case_insensitively() {
        let html = r#"<body>
            <a>IR AL CONTENIDO principal</a>
            <nav>Menú de accesibilidad</nav>
            <p>Inscripciones</p>
        </body>"#;

        let fragments = extractor(&["Ir al contenido", "menú de   accesibilidad"]).extract(html);
        assert_eq!(fragments, vec!["Inscripciones"]);
    }

    #[test]
    fn blank_denylist_entries_are_ignored() {
        let fragments = extractor(&["", "   "]).extract("<body><p>Grados</p></body>");
        assert_eq!(fragments, vec!["Grados"]);
    }

    #[test]
    fn handles_fragment_without_body() {
        let fragments = TextExtractor::default().extract("Solo texto");
        assert_eq!(fragments, vec!["Solo texto"]);
    }
}
