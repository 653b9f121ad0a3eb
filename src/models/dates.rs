//! Calendar helpers shared by the period and report math
//!
//! Month arithmetic here follows the rollover rules of the web client the
//! records come from: a day that does not exist in the target month spills
//! into the next one instead of being clamped.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::fmt::Write;

/// Date format used by the API and accepted on the command line
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render `date` with a user-supplied strftime format
///
/// Formats chrono cannot render (unknown specifiers, time zone fields on a
/// plain date) fall back to [`API_DATE_FORMAT`].
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_ok() {
        return out;
    }
    date.format(API_DATE_FORMAT).to_string()
}

/// Check that a strftime format can render a calendar date
pub fn is_valid_date_format(format: &str) -> bool {
    let mut out = String::new();
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .map(|sample| write!(out, "{}", sample.format(format)).is_ok())
        .unwrap_or(false)
}

/// Parse an API date (`YYYY-MM-DD`), also accepting a full timestamp
/// whose first ten characters are the date
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, API_DATE_FORMAT)
        .ok()
        .or_else(|| {
            s.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, API_DATE_FORMAT).ok())
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for date fields; anything unreadable becomes `None`
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => parse_api_date(&text),
        RawDate::Other(_) => None,
    })
}

/// Parse an API timestamp: RFC 3339, or a zone-less ISO timestamp read
/// as UTC
pub fn parse_api_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Serde adapter for timestamp fields; anything unreadable becomes `None`
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => parse_api_timestamp(&text),
        RawDate::Other(_) => None,
    })
}

/// First day of the month `offset` months away from `date`'s month
///
/// Negative offsets walk backwards; the year carries as needed. `None`
/// when the month lies outside the representable calendar.
pub fn first_of_month_offset(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let months = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(offset);
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month0 = months.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Last day of `date`'s month
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month_offset(date, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The same day-of-month one calendar month later, rolling over
///
/// Jan 31 lands on Mar 3 in a non-leap year (Feb 1 plus 30 days). `None`
/// past the end of the representable calendar.
pub fn add_one_month_rolling(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month_offset(date, 1)?.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Month bucket label, e.g. "Jan 2025"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
