//! The fixed display locale.
//!
//! Labels and numbers are rendered the way the `ru-RU` locale writes them:
//! long dates as `1 января 2024 г.` and large counts with a no-break space
//! between thousands groups.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::DateSpanError;

/// Thousands separator used by `ru-RU` number formatting.
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Month names in the genitive case, as they appear after a day number.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Display locale for labels and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ru-RU")]
    RuRu,
}

impl Locale {
    /// BCP 47 tag of the locale.
    pub fn tag(self) -> &'static str {
        match self {
            Self::RuRu => "ru-RU",
        }
    }

    /// Render a date as day, full month name and year.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_span::Locale;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    /// assert_eq!(Locale::RuRu.format_long_date(date), "8 марта 2024 г.");
    /// ```
    pub fn format_long_date(self, date: NaiveDate) -> String {
        match self {
            Self::RuRu => {
                let month = MONTHS_GENITIVE[date.month0() as usize];
                format!("{} {} {} г.", date.day(), month, date.year())
            }
        }
    }

    /// Render an integer with the locale's thousands grouping.
    ///
    /// Numbers shorter than five digits are left ungrouped (`1234`), longer
    /// ones get a separator every three digits (`12 345`).
    pub fn group_digits(self, n: u64) -> String {
        match self {
            Self::RuRu => group_with(n, GROUP_SEPARATOR, 5),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = DateSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ru-ru" | "ru" => Ok(Self::RuRu),
            _ => Err(DateSpanError::UnsupportedLocale(format!("'{}'", s.trim()))),
        }
    }
}

fn group_with(n: u64, separator: char, min_digits: usize) -> String {
    let digits = n.to_string();
    if digits.len() < min_digits {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_date_new_year() {
        assert_eq!(
            Locale::RuRu.format_long_date(date(2024, 1, 1)),
            "1 января 2024 г."
        );
    }

    #[test]
    fn test_long_date_uses_genitive_month_names() {
        let rendered: Vec<String> = (1..=12)
            .map(|m| Locale::RuRu.format_long_date(date(2025, m, 15)))
            .collect();
        assert_eq!(rendered[1], "15 февраля 2025 г.");
        assert_eq!(rendered[4], "15 мая 2025 г.");
        assert_eq!(rendered[11], "15 декабря 2025 г.");
        assert!(rendered.iter().all(|s| s.ends_with(" 2025 г.")));
    }

    #[test]
    fn test_long_date_day_is_not_padded() {
        assert_eq!(
            Locale::RuRu.format_long_date(date(2024, 2, 9)),
            "9 февраля 2024 г."
        );
    }

    #[test]
    fn test_long_date_leap_day() {
        assert_eq!(
            Locale::RuRu.format_long_date(date(2024, 2, 29)),
            "29 февраля 2024 г."
        );
    }

    #[test]
    fn test_group_digits_short_numbers_untouched() {
        assert_eq!(Locale::RuRu.group_digits(0), "0");
        assert_eq!(Locale::RuRu.group_digits(999), "999");
        assert_eq!(Locale::RuRu.group_digits(1234), "1234");
    }

    #[test]
    fn test_group_digits_inserts_no_break_space() {
        assert_eq!(Locale::RuRu.group_digits(12345), "12\u{a0}345");
        assert_eq!(Locale::RuRu.group_digits(123456), "123\u{a0}456");
        assert_eq!(Locale::RuRu.group_digits(1234567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!("ru-RU".parse::<Locale>().unwrap(), Locale::RuRu);
        assert_eq!("ru_ru".parse::<Locale>().unwrap(), Locale::RuRu);
        assert_eq!(" RU ".parse::<Locale>().unwrap(), Locale::RuRu);
    }

    #[test]
    fn test_parse_unknown_locale_returns_error() {
        let err = "en-US".parse::<Locale>().unwrap_err().to_string();
        assert!(err.contains("Unsupported locale"), "got: {err}");
    }

    #[test]
    fn test_display_is_tag() {
        assert_eq!(Locale::RuRu.to_string(), "ru-RU");
        assert_eq!(Locale::default(), Locale::RuRu);
    }
}
