//! Monetary amounts
//!
//! Amounts are carried as [`Decimal`] end to end. The API serializes them
//! as strings (`"120.00"`) or plain numbers depending on the endpoint, and
//! older records occasionally carry garbage; anything that cannot be read
//! as a number counts as zero instead of failing the whole snapshot.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parse an amount leniently
///
/// Accepts plain (`"10.50"`, `"-3"`) and scientific (`"1e3"`) notation,
/// with surrounding whitespace. Anything else is zero.
pub fn parse_amount(s: &str) -> Decimal {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Value(Decimal),
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for amount fields: strings, numbers, `null` or anything
/// else, never an error
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Value(value) => value,
        RawAmount::Text(text) => parse_amount(&text),
        RawAmount::Other(_) => Decimal::ZERO,
    })
}

/// Format an amount with a currency symbol and two decimals
///
/// The symbol is always supplied by the caller's settings.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}
