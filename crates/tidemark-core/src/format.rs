// File: crates/tidemark-core/src/format.rs
// Summary: Number formatting for tick labels, legends and tooltips.

/// Insert `,` between groups of three digits in an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-point with `decimals` digits and grouped thousands, e.g. `1234.5` -> `"1,234.50"`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    grouped(value, &format!("{:.*}", decimals, value.abs()))
}

/// Shortest round-trip text with grouped thousands: `2021` -> `"2,021"`, `1950.5` -> `"1,950.5"`.
pub fn format_grouped_shortest(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    grouped(value, &value.abs().to_string())
}

/// Group the integer part of `unsigned` (the text of `|value|`) and restore the sign.
fn grouped(value: f64, unsigned: &str) -> String {
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut out = String::new();
    // "-0" and "-0.00" print without the sign
    if value < 0.0 && unsigned.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Decimal places needed to distinguish ticks spaced `step` apart.
pub fn tick_precision(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

pub fn format_tick(value: f64, step: f64) -> String {
    format_grouped(value, tick_precision(step))
}

/// Shortest round-trip text for a measured value (`0.1606547619`, `3`, `-2.5`).
pub fn format_measure(value: f64) -> String {
    format!("{value}")
}
