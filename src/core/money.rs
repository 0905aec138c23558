//! Amount parsing, conversion and limit checks.
//!
//! Everything here is pure and runs on every edit.

use crate::core::currency::CurrencyCode;

/// Parses user-entered amount text. Anything that isn't a finite number is 0.0.
pub fn parse_amount(text: &str) -> f64 {
    parse_amount_or(text, 0.0)
}

pub(crate) fn parse_amount_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Rounds to two decimals, half away from zero, on the shortest decimal form
/// of `value` rather than its binary expansion, so 1.005 becomes 1.01.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // `Display` for f64 never uses exponent notation.
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits = fraction.chars();
    let kept: String = digits.by_ref().take(2).collect();
    let round_up = digits.next().is_some_and(|d| d >= '5');

    let cents = format!("{whole}{kept:0<2}").parse::<f64>().unwrap_or(0.0);
    let cents = if round_up { cents + 1.0 } else { cents };
    (cents / 100.0).copysign(value)
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round2(amount))
}

pub fn format_rate_label(from: &CurrencyCode, to: &CurrencyCode, rate: f64) -> String {
    format!("1 {from} = {rate:.4} {to}")
}

/// Converts a source amount into the destination currency.
pub fn convert(amount: f64, rate: f64) -> f64 {
    round2(amount * rate)
}

/// Converts a destination amount back into the source currency.
///
/// A zero rate cannot be inverted, so `previous` is returned as is.
pub fn convert_back(amount: f64, rate: f64, previous: f64) -> f64 {
    if rate == 0.0 {
        return previous;
    }
    round2(amount / rate)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitCheck {
    pub exceeded: bool,
    pub message: String,
}

pub fn check_limit(amount: f64, currency: &CurrencyCode) -> LimitCheck {
    let limit = currency.limit();
    if amount > limit {
        LimitCheck {
            exceeded: true,
            message: format!("Limit for {currency} is {limit:.1}"),
        }
    } else {
        LimitCheck::default()
    }
}
