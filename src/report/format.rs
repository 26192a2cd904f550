//! Number formatting helpers

use rust_decimal::Decimal;

/// Group the integer digits of a non-negative decimal string with commas
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Whole-dollar amount, e.g. `$4,042,500` or `-$457,500`
pub fn currency(value: Decimal) -> String {
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}", sign, group_thousands(&rounded.abs().to_string()))
}

/// Whole-dollar amount with an explicit sign, e.g. `+$1,842,500`
pub fn signed_currency(value: Decimal) -> String {
    if value.round() >= Decimal::ZERO {
        format!("+{}", currency(value))
    } else {
        currency(value)
    }
}

/// Square footage with up to two decimals, e.g. `18,158.75`
pub fn square_feet(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, group_thousands(&rounded.abs().to_string()))
}

/// Percentage with one decimal, e.g. `83.8%`
pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// Ratio rendered as a percentage, e.g. `0.9637` becomes `96.4%`
pub fn ratio_percent(ratio: Decimal) -> String {
    percent(ratio * Decimal::ONE_HUNDRED)
}
