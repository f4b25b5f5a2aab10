//! Display formatting for KPI values.
//!
//! Keeps number formatting consistent across the dashboard pages.

/// Group an integer with thousands separators: 1234567 -> "1,234,567"
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Whole-dollar money: 48123.6 -> "$48,124"
pub fn format_money(value: f64) -> String {
    format!("${}", format_thousands(value.round() as i64))
}

/// Cent-precision money for small unit prices: 12.345 -> "$12.35"
pub fn format_money_precise(value: f64) -> String {
    format!("${:.2}", value)
}

/// Percentage with one decimal; `None` renders as the placeholder dash.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "—".to_string(),
    }
}

/// Plain count rounded to a whole number: 42.5 -> "43"
pub fn format_count(value: f64) -> String {
    format_thousands(value.round() as i64)
}
