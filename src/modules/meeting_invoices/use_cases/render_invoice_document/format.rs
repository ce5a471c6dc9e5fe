// Number formatting for the invoice document, en-US style: comma thousands separators and a
// bounded number of fraction digits. Ties round half away from zero.

use crate::shared::core::primitives::round_to_places;

pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = round_to_places(value.abs(), max_fraction as i32);
    let fixed = format!("{:.*}", max_fraction, rounded);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// `$` amount with up to three fraction digits, as the summary block shows it.
pub fn format_total(value: f64) -> String {
    format!("${}", format_grouped(value, 0, 3))
}

/// `$` amount with exactly two fraction digits, as table rows show it.
pub fn format_money(value: f64) -> String {
    format!("${}", format_grouped(value, 2, 2))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
