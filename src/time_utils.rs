// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day parsing and formatting.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Parse a backend-supplied date into a calendar day.
///
/// Accepts a plain `YYYY-MM-DD` date or a full RFC3339 timestamp (the
/// backend uses both depending on the endpoint). Time-of-day is discarded.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Format a day as the `dd/mm` label used on chart axes.
///
/// Display only: keying and sorting always use the underlying `NaiveDate`,
/// never this string, so series spanning a year boundary stay ordered.
pub fn day_label(day: NaiveDate) -> String {
    day.format("%d/%m").to_string()
}

/// Format a day as the `YYYY-MM-DD` form the backend expects in queries.
pub fn day_param(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
