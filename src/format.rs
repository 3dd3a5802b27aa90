//! Display helpers for pt-BR number formatting.

use crate::constants::display::THOUSANDS_SEPARATOR;

/// Format `value` with pt-BR thousands separators (`1234567` -> `1.234.567`).
pub fn format_count(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(THOUSANDS_SEPARATOR);
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

/// Format a share card value: one decimal place, or `0%` when there is no total.
pub fn format_share(percent: Option<f64>) -> String {
    match percent {
        Some(percent) => format!("{percent:.1}%"),
        None => "0%".to_string(),
    }
}
