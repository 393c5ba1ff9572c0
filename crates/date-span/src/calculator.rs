//! Whole-day difference between two date inputs.
//!
//! Every function here is pure: it takes the raw input strings and returns a
//! value, never touching the clock or any shared state. Missing or
//! unparseable input is not an error to the caller. [`compute`] reports it as
//! `None` and [`format_label`] as an empty string.
//!
//! # Functions
//!
//! - [`parse_date_input`] — Parse one input into a UTC instant
//! - [`compute`] — Ceiling of the absolute difference in days
//! - [`compute_span`] — The same count bundled with its display forms
//! - [`format_label`] — Long locale label for one input

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::error::{DateSpanError, Result};
use crate::locale::Locale;
use crate::plural::PluralBucket;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: u64 = 86_400_000;

// ── parse_date_input ────────────────────────────────────────────────────────

/// Parse one date input into a UTC instant.
///
/// Accepted forms, tried in order after trimming whitespace:
///
/// - `YYYY-MM-DD` — midnight UTC of that date
/// - RFC 3339 with an offset (e.g., `"2024-01-01T10:00:00+03:00"`)
/// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` — naive, taken as UTC
///
/// # Errors
///
/// Returns [`DateSpanError::EmptyInput`] for an empty or whitespace-only
/// string, and [`DateSpanError::InvalidDate`] when no form matches, the date
/// part is not zero-padded (`"2024-1-5"`), or the calendar date does not
/// exist (e.g., `"2023-02-29"`).
pub fn parse_date_input(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateSpanError::EmptyInput);
    }
    if !has_padded_date_prefix(s) {
        return Err(DateSpanError::InvalidDate(format!("'{s}'")));
    }

    try_iso_date(s)
        .or_else(|| try_rfc3339(s))
        .or_else(|| try_naive_datetime(s))
        .ok_or_else(|| DateSpanError::InvalidDate(format!("'{s}'")))
}

// ── compute ─────────────────────────────────────────────────────────────────

/// Count whole days between two date inputs.
///
/// The absolute difference is taken in milliseconds and divided by
/// [`MILLIS_PER_DAY`], rounding up. Any fractional remainder counts as one
/// more day, while identical instants give `Some(0)`.
///
/// Returns `None` if either input is empty or cannot be parsed.
///
/// # Examples
///
/// ```
/// use date_span::compute;
///
/// assert_eq!(compute("2024-01-01", "2024-01-04"), Some(3));
/// assert_eq!(compute("2024-01-04", "2024-01-01"), Some(3));
/// assert_eq!(compute("2024-01-01", "2024-01-01"), Some(0));
/// assert_eq!(compute("", "2024-01-10"), None);
/// ```
pub fn compute(start: &str, end: &str) -> Option<u64> {
    let start_dt = parse_or_absent(start)?;
    let end_dt = parse_or_absent(end)?;

    let millis = (end_dt - start_dt).num_milliseconds().unsigned_abs();
    Some(millis.div_ceil(MILLIS_PER_DAY))
}

// ── compute_span ────────────────────────────────────────────────────────────

/// A day count together with everything needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySpan {
    /// Whole days between the two inputs.
    pub days: u64,
    /// Grammatical number selected by `days`.
    pub bucket: PluralBucket,
    /// Unit word for `days` (e.g., "дня").
    pub unit: &'static str,
    /// `days` with the locale's thousands grouping.
    pub display: String,
}

impl DaySpan {
    /// Build the display record for an already computed count.
    pub fn new(days: u64, locale: Locale) -> Self {
        let bucket = PluralBucket::classify(days);
        Self {
            days,
            bucket,
            unit: bucket.day_unit(),
            display: locale.group_digits(days),
        }
    }
}

/// Like [`compute`], but returns the count with its plural bucket, unit word
/// and grouped rendering.
pub fn compute_span(start: &str, end: &str, locale: Locale) -> Option<DaySpan> {
    compute(start, end).map(|days| DaySpan::new(days, locale))
}

// ── format_label ────────────────────────────────────────────────────────────

/// Format one input as a long date label in `locale`.
///
/// Empty input gives an empty label. Input that does not parse also gives an
/// empty label rather than an "invalid date" placeholder.
///
/// # Examples
///
/// ```
/// use date_span::{format_label, Locale};
///
/// assert_eq!(format_label("2024-01-01", Locale::RuRu), "1 января 2024 г.");
/// assert_eq!(format_label("", Locale::RuRu), "");
/// assert_eq!(format_label("2024-13-01", Locale::RuRu), "");
/// ```
pub fn format_label(input: &str, locale: Locale) -> String {
    parse_or_absent(input)
        .map(|dt| locale.format_long_date(dt.date_naive()))
        .unwrap_or_default()
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse, logging and discarding the error.
fn parse_or_absent(input: &str) -> Option<DateTime<Utc>> {
    match parse_date_input(input) {
        Ok(dt) => Some(dt),
        Err(DateSpanError::EmptyInput) => None,
        Err(e) => {
            debug!("ignoring date input: {e}");
            None
        }
    }
}

/// `YYYY-MM-DD` with every field at full width, optionally followed by a time.
fn has_padded_date_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 10 || (bytes.len() > 10 && bytes[10] != b'T' && bytes[10] != b't') {
        return false;
    }
    bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

fn try_iso_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn try_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn try_naive_datetime(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map(|naive| naive.and_utc())
        .ok()
}

// ── Tests ───────────────────────────────────────────────────────────────────
