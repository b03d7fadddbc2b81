//! # Delivery Display Formatting
//!
//! Renders the carrier's estimated delivery timestamp as a human-readable
//! Spanish (es-MX) string.
//!
//! Rules:
//! - Product codes in the date-only subset (`N`, `G`) render only the full
//!   date: `Miércoles 12 de Noviembre de 2025`.
//! - All other codes append the 24-hour time:
//!   `Miércoles 12 de Noviembre de 2025 09:26`.
//! - Connectives stay lowercase (`de`), day and month names are
//!   capitalized.
//! - An absent or unparseable timestamp yields `None`, never an empty
//!   string.
//!
//! Carrier timestamps are naive local times (`YYYY-MM-DDTHH:MM:SS`); they
//! are rendered as-is without timezone conversion.

use crate::domain::value_objects::product_code::ProductCode;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

const WEEKDAYS_ES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Formats the delivery display string for one quote option.
///
/// Returns `None` when the timestamp is missing or cannot be parsed.
#[must_use]
pub fn format_delivery_display(product_code: &ProductCode, timestamp: &str) -> Option<String> {
    let parsed = parse_timestamp(timestamp)?;
    let date_text = format_date_es(parsed.date());

    if product_code.is_date_only() {
        return Some(date_text);
    }

    Some(format!(
        "{} {:02}:{:02}",
        date_text,
        parsed.hour(),
        parsed.minute()
    ))
}

/// Parses an ISO-like carrier timestamp, accepting a bare date as a
/// midnight fallback.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Renders `Miércoles 12 de Noviembre de 2025`.
fn format_date_es(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_ES[weekday_index(date.weekday())];
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} {} de {} de {}", weekday, date.day(), month, date.year())
}

fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn code(raw: &str) -> ProductCode {
        ProductCode::parse_allowed(raw).unwrap()
    }

    #[test]
    fn date_only_codes_render_date_without_time() {
        let display = format_delivery_display(&code("N"), "2025-11-12T23:59:00").unwrap();
        assert_eq!(display, "Miércoles 12 de Noviembre de 2025");

        let display = format_delivery_display(&code("G"), "2025-11-12T23:59:00").unwrap();
        assert!(!display.contains(':'));
    }

    #[test]
    fn timed_codes_render_date_and_24h_time() {
        let display = format_delivery_display(&code("1"), "2025-11-12T09:26:00").unwrap();
        assert_eq!(display, "Miércoles 12 de Noviembre de 2025 09:26");

        let display = format_delivery_display(&code("O"), "2025-11-12T14:05:00").unwrap();
        assert!(display.ends_with("14:05"));
    }

    #[test]
    fn bare_date_falls_back_to_midnight() {
        let display = format_delivery_display(&code("O"), "2025-11-12").unwrap();
        assert_eq!(display, "Miércoles 12 de Noviembre de 2025 00:00");
    }

    #[test]
    fn unparseable_timestamp_yields_none() {
        assert!(format_delivery_display(&code("1"), "mañana").is_none());
        assert!(format_delivery_display(&code("1"), "").is_none());
        assert!(format_delivery_display(&code("1"), "12/11/2025").is_none());
    }

    #[test]
    fn connectives_stay_lowercase() {
        let display = format_delivery_display(&code("N"), "2026-01-05T10:00:00").unwrap();
        assert_eq!(display, "Lunes 5 de Enero de 2026");
    }

    #[test]
    fn all_weekdays_covered() {
        // 2025-11-10 is a Monday.
        let expected = [
            "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo",
        ];
        for (offset, name) in expected.iter().enumerate() {
            let day = 10 + offset;
            let display =
                format_delivery_display(&code("N"), &format!("2025-11-{:02}T12:00:00", day))
                    .unwrap();
            assert!(display.starts_with(name), "{} != {}", display, name);
        }
    }
}
