//! Text formatting for prices, addresses and popup markup.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Thousands separator used by Russian locale formatting (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Group digits in threes: `36000` -> `36 000`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Price with the rouble sign: `12 000 ₽`.
#[must_use]
pub fn format_rubles(value: u64) -> String {
    format!("{}{GROUP_SEPARATOR}₽", group_thousands(value))
}

/// First comma-separated part of an address (usually the city).
#[must_use]
pub fn short_location(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
