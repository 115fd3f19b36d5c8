//! Display formatting helpers.

/// Format a price with a dollar sign and two decimal places.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Group a count with comma thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
