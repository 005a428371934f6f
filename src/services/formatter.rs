// src/services/formatter.rs

//! Reply rendering.

use crate::models::PeriodBuckets;

/// Render filtered buckets as the chat reply.
///
/// Periods appear in label order; entries keep document order.
pub fn render(buckets: &PeriodBuckets, year: i32) -> String {
    if buckets.is_empty() {
        return format!("No se encontraron fechas para el año {year}.");
    }

    let mut blocks = Vec::with_capacity(buckets.len() + 1);
    blocks.push(format!(
        "📅 Fechas importantes del calendario académico {year}"
    ));

    for (label, entries) in buckets {
        let mut block = format!("🗓️ Periodo {label}");
        for entry in entries {
            block.push_str(&format!("\n  📌 {}: {}", entry.title, entry.date));
        }
        blocks.push(block);
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodEntry;

    fn entry(title: &str, date: &str) -> PeriodEntry {
        PeriodEntry {
            title: title.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn renders_periods_in_label_order() {
        let mut buckets = PeriodBuckets::new();
        buckets.insert("2026-2".to_string(), vec![entry("Matrículas", "3 de agosto")]);
        buckets.insert(
            "2026-1".to_string(),
            vec![
                entry("Matrículas", "2 de febrero"),
                entry("Inicio de clases", "9 de febrero"),
            ],
        );

        let expected = "📅 Fechas importantes del calendario académico 2026\n\
                        \n\
                        🗓️ Periodo 2026-1\n  📌 Matrículas: 2 de febrero\n  📌 Inicio de clases: 9 de febrero\n\
                        \n\
                        🗓️ Periodo 2026-2\n  📌 Matrículas: 3 de agosto";
        assert_eq!(render(&buckets, 2026), expected);
    }

    #[test]
    fn renders_empty_message() {
        assert_eq!(
            render(&PeriodBuckets::new(), 2026),
            "No se encontraron fechas para el año 2026."
        );
    }
}
