// src/pipeline/calendar.rs

//! Calendar pipeline: fetch → extract → segment → group → filter → render.

use reqwest::Client;

use crate::error::Result;
use crate::models::{CalendarReport, Config};
use crate::services::{ActivitySegmenter, TextExtractor, filter_by_year, group_by_period, render};
use crate::utils::http::fetch_text;

/// Fetch the calendar page and build the reply for `year`.
pub async fn run_calendar(config: &Config, client: &Client, year: i32) -> Result<CalendarReport> {
    log::info!("Fetching calendar page {}", config.source.url);
    let html = fetch_text(client, &config.source.url).await?;
    log::debug!("Fetched {} bytes", html.len());

    build_report(config, &html, year)
}

/// Build the report from an already fetched page.
pub fn build_report(config: &Config, html: &str, year: i32) -> Result<CalendarReport> {
    let extractor = TextExtractor::new(&config.extraction)?;
    let fragments = extractor.extract(html);

    let activities = ActivitySegmenter::new(&config.extraction).segment(&fragments);
    let all_periods = group_by_period(&activities);
    let period_total = all_periods.len();
    let periods = filter_by_year(all_periods, year);

    log::info!(
        "Extracted {} fragments, {} activities, {}/{} periods for {}",
        fragments.len(),
        activities.len(),
        periods.len(),
        period_total,
        year
    );

    let text = render(&periods, year);

    Ok(CalendarReport {
        year,
        fragment_count: fragments.len(),
        activities,
        periods,
        text,
    })
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::utils::http::create_async_client;

    const PAGE: &str = r##"
        <html><body>
          <header><a href="#main">Ir al contenido</a><span>Menú de accesibilidad</span></header>
          <main>
            <h3>Matrículas ordinarias</h3>
            <p>2 de febrero de 2026</p><p>2026-1</p>
            <p>3 de agosto de 2026</p><p>2026-2</p>
            <h3>Inicio de clases</h3>
            <p>9 de febrero</p><p>2026-1</p>
            <h3>Ceremonia de grados</h3>
            <p>12 de diciembre</p><p>2025-2</p>
          </main>
          <footer>Todos los derechos reservados 2026</footer>
        </body></html>"##;

    #[test]
    fn builds_report_for_year() {
        let report = build_report(&Config::default(), PAGE, 2026).unwrap();

        assert_eq!(report.activities.len(), 3);
        assert_eq!(
            report.periods.keys().collect::<Vec<_>>(),
            vec!["2026-1", "2026-2"]
        );
        assert_eq!(report.entry_count(), 3);
        assert!(report.text.starts_with("📅 Fechas importantes del calendario académico 2026"));
        assert!(report.text.contains("📌 Inicio de clases: 9 de febrero"));
        assert!(!report.text.contains("grados"));
        assert!(!report.text.contains("Ir al contenido"));
    }

    #[test]
    fn other_year_yields_empty_message() {
        let report = build_report(&Config::default(), PAGE, 2030).unwrap();
        assert!(report.periods.is_empty());
        assert_eq!(report.text, "No se encontraron fechas para el año 2030.");
    }

    #[tokio::test]
    async fn run_calendar_fetches_configured_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.source.url = server.uri();
        let client = create_async_client(&config.source).unwrap();

        let report = run_calendar(&config, &client, 2025).await.unwrap();
        assert_eq!(report.periods.keys().collect::<Vec<_>>(), vec!["2025-2"]);
    }
}
