//! # date-span
//!
//! Whole-day difference between two calendar dates.
//!
//! Given two date inputs, the crate computes the ceiling of their absolute
//! difference in days, picks the Russian plural form of the unit word, and
//! renders each input as a long `ru-RU` date label. Missing or unparseable
//! input never raises an error to the caller: the count is simply absent.
//!
//! ## Modules
//!
//! - [`calculator`] — Input parsing, day count, date labels
//! - [`plural`] — Singular / few / many classification of a count
//! - [`locale`] — The fixed `ru-RU` display locale
//! - [`form`] — Two-input form state with a derived count and a view model
//! - [`error`] — Error types

pub mod calculator;
pub mod error;
pub mod form;
pub mod locale;
pub mod plural;

pub use calculator::{
    compute, compute_span, format_label, parse_date_input, DaySpan, MILLIS_PER_DAY,
};
pub use error::DateSpanError;
pub use form::{DateForm, Field, FormView, InputView, ResultPanel, RESULT_CAPTION};
pub use locale::Locale;
pub use plural::PluralBucket;
