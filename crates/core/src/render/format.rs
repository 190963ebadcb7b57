//! Number, date and label formatting shared by the renderers and the summary cards.

use chrono::{Datelike, NaiveDate};

/// Shown wherever a value is missing or meaningless.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a coordinate for an SVG attribute: at most two decimals, no
/// trailing zeros, never `NaN`/`inf`.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        tracing::warn!(value, "non-finite coordinate replaced with 0");
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        // Also normalizes -0 to 0.
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Literal value label: integers without decimals, fractions trimmed to
/// two places.
pub fn format_value(value: f64) -> String {
    fmt_num(value)
}

/// Audit ratio display rule: `None`, non-finite and exactly zero are
/// unavailable; everything else is rounded to one decimal place.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r.is_finite() && r != 0.0 => format!("{r:.1}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `DD-MM-YYYY` from the date portion of an ISO-8601 string.
///
/// Falls back to the input unchanged when it does not start with a
/// `YYYY-MM-DD` date.
pub fn format_display_date(timestamp: &str) -> String {
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => timestamp.to_string(),
    }
}

/// `DD-MM-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// `MM/YY`, used for month tick labels.
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.year().rem_euclid(100))
}

/// Last `/`-delimited segment of `path`, or the whole path when that
/// segment is empty.
pub fn last_path_segment(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => path,
    }
}

/// Shorten `label` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
