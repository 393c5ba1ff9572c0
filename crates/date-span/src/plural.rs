//! Grammatical number for the day-count unit.
//!
//! Russian picks one of three noun forms after a numeral. The result panel
//! uses a simplified version of that rule applied to the raw count:
//!
//! | count            | bucket                      | unit   |
//! |------------------|-----------------------------|--------|
//! | 1                | [`PluralBucket::Singular`]  | день   |
//! | 2, 3, 4          | [`PluralBucket::Few`]       | дня    |
//! | 0, 5 and above   | [`PluralBucket::Many`]      | дней   |
//!
//! Only the raw value is inspected, so 21 and 22 both land in `Many`.

use serde::Serialize;

/// One of the three display forms for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralBucket {
    Singular,
    Few,
    Many,
}

impl PluralBucket {
    /// Classify a non-negative count.
    ///
    /// # Examples
    ///
    /// ```
    /// use date_span::PluralBucket;
    ///
    /// assert_eq!(PluralBucket::classify(0), PluralBucket::Many);
    /// assert_eq!(PluralBucket::classify(1), PluralBucket::Singular);
    /// assert_eq!(PluralBucket::classify(4), PluralBucket::Few);
    /// assert_eq!(PluralBucket::classify(5), PluralBucket::Many);
    /// ```
    pub fn classify(count: u64) -> Self {
        match count {
            1 => Self::Singular,
            2..=4 => Self::Few,
            _ => Self::Many,
        }
    }

    /// The Russian word for "day" in this grammatical number.
    pub fn day_unit(self) -> &'static str {
        match self {
            Self::Singular => "день",
            Self::Few => "дня",
            Self::Many => "дней",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_many() {
        assert_eq!(PluralBucket::classify(0), PluralBucket::Many);
        assert_eq!(PluralBucket::classify(0).day_unit(), "дней");
    }

    #[test]
    fn test_one_is_singular() {
        assert_eq!(PluralBucket::classify(1), PluralBucket::Singular);
        assert_eq!(PluralBucket::Singular.day_unit(), "день");
    }

    #[test]
    fn test_two_to_four_are_few() {
        for n in 2..=4 {
            assert_eq!(PluralBucket::classify(n), PluralBucket::Few, "count {n}");
            assert_eq!(PluralBucket::classify(n).day_unit(), "дня");
        }
    }

    #[test]
    fn test_five_and_up_are_many() {
        for n in [5, 6, 9, 11, 20, 21, 22, 101, 1000] {
            assert_eq!(PluralBucket::classify(n), PluralBucket::Many, "count {n}");
        }
    }

    #[test]
    fn test_bucket_serializes_lowercase() {
        let json = serde_json::to_string(&PluralBucket::Few).unwrap();
        assert_eq!(json, "\"few\"");
    }

    proptest! {
        #[test]
        fn prop_counts_above_four_are_many(n in 5u64..u64::MAX) {
            prop_assert_eq!(PluralBucket::classify(n), PluralBucket::Many);
        }
    }
}
