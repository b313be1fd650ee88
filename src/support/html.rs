//! HTML escaping for server-rendered pages

use std::fmt::Display;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape any displayable value.
pub fn esc<T: Display + ?Sized>(value: &T) -> String {
    escape(&value.to_string())
}

/// Render an optional value, `-` when missing.
pub fn esc_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => esc(v),
        None => "-".to_string(),
    }
}

/// Format a monetary amount with two decimals.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}
