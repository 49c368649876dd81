//! Calendar dates and review intervals.
//!
//! Due dates are whole calendar days rendered as `YYYY-MM-DD`. Because the
//! rendering is fixed-width and zero-padded, comparing two rendered dates as
//! strings agrees with comparing them on the calendar; [`ReviewDate`] orders
//! by the underlying [`NaiveDate`] so neither form is needed at call sites.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::error::{ModelError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day on which a card becomes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewDate(NaiveDate);

impl ReviewDate {
    /// Default due date of a card that has never been reviewed.
    pub const EPOCH: ReviewDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
        Some(date) => ReviewDate(date),
        None => panic!("epoch is a valid calendar date"),
    };

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// The value must survive a format round trip, so unpadded fields
    /// (`2024-1-5`) and impossible days (`2024-02-30`) are rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ModelError::InvalidDate(value.to_string()))?;
        if date.format(DATE_FORMAT).to_string() != value {
            return Err(ModelError::InvalidDate(value.to_string()));
        }
        Ok(Self(date))
    }

    /// Calendar addition with month and year rollover.
    pub fn add_days(self, days: u32) -> Result<Self> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .map(Self)
            .ok_or(ModelError::DateOutOfRange { date: self, days })
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReviewDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for ReviewDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReviewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl serde::Serialize for ReviewDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ReviewDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Number of days until the next review.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Interval(u32);

impl Interval {
    pub const ZERO: Interval = Interval(0);
    /// Shortest interval a review can schedule.
    pub const ONE_DAY: Interval = Interval(1);

    pub const fn from_days(days: u32) -> Self {
        Self(days)
    }

    pub const fn days(self) -> u32 {
        self.0
    }

    /// Twice this interval, saturating at the largest representable value.
    #[must_use]
    pub const fn doubled(self) -> Self {
        Self(self.0.saturating_mul(2))
    }
}

impl TryFrom<i64> for Interval {
    type Error = ModelError;

    fn try_from(days: i64) -> Result<Self> {
        if days < 0 {
            return Err(ModelError::NegativeInterval(days));
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ModelError::IntervalTooLarge(days))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_renders_as_sentinel() {
        assert_eq!(ReviewDate::EPOCH.to_string(), "2000-01-01");
    }

    #[test]
    fn parse_requires_padding() {
        assert!(ReviewDate::parse("2024-01-05").is_ok());
        assert_eq!(
            ReviewDate::parse("2024-1-5"),
            Err(ModelError::InvalidDate("2024-1-5".to_string()))
        );
    }

    #[test]
    fn parse_rejects_impossible_days() {
        assert!(ReviewDate::parse("2024-02-30").is_err());
        assert!(ReviewDate::parse("2023-02-29").is_err());
        assert!(ReviewDate::parse("2024-02-29").is_ok());
    }

    #[test]
    fn parse_rejects_trailing_text() {
        assert!(ReviewDate::parse("2024-01-05 00:00:00").is_err());
        assert!(ReviewDate::parse("").is_err());
        assert!(ReviewDate::parse("tomorrow").is_err());
    }

    #[test]
    fn add_days_rolls_over_months_and_years() {
        let leap = ReviewDate::parse("2024-02-28").unwrap();
        assert_eq!(leap.add_days(2).unwrap().to_string(), "2024-03-01");
        let new_year = ReviewDate::parse("2023-12-31").unwrap();
        assert_eq!(new_year.add_days(1).unwrap().to_string(), "2024-01-01");
        assert_eq!(new_year.add_days(0).unwrap(), new_year);
    }

    #[test]
    fn add_days_reports_overflow() {
        let date = ReviewDate::parse("2024-01-01").unwrap();
        assert!(matches!(
            date.add_days(u32::MAX),
            Err(ModelError::DateOutOfRange { days: u32::MAX, .. })
        ));
    }

    #[test]
    fn ordering_matches_string_ordering() {
        let dates = ["1999-12-31", "2000-01-01", "2000-01-10", "2000-02-01", "2010-01-01"];
        for pair in dates.windows(2) {
            let a = ReviewDate::parse(pair[0]).unwrap();
            let b = ReviewDate::parse(pair[1]).unwrap();
            assert!(a < b);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn interval_rejects_negative() {
        assert_eq!(Interval::try_from(-1), Err(ModelError::NegativeInterval(-1)));
        assert_eq!(Interval::try_from(0), Ok(Interval::ZERO));
        assert_eq!(Interval::try_from(32).map(Interval::days), Ok(32));
        assert!(matches!(
            Interval::try_from(i64::from(u32::MAX) + 1),
            Err(ModelError::IntervalTooLarge(_))
        ));
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(Interval::from_days(4).doubled(), Interval::from_days(8));
        assert_eq!(Interval::ZERO.doubled(), Interval::ZERO);
        assert_eq!(
            Interval::from_days(u32::MAX).doubled(),
            Interval::from_days(u32::MAX)
        );
    }
}
