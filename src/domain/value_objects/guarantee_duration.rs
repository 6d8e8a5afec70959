//! Guarantee duration value object.
//!
//! Provides a day-expressible duration for in-store guarantee periods.

use std::cmp::Ordering;
use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::ValueObject;

/// A duration measured in whole calendar days.
///
/// `GuaranteeDuration` represents the length of an in-store guarantee
/// period. It is deliberately restricted to day-expressible terms: the
/// constructors accept days and weeks only, so [`in_days`] is always exact
/// and never depends on month-length normalization.
///
/// No sign validation is performed; a negative duration is accepted and
/// simply reports a negative day count. Enforcing positivity is the
/// creator's responsibility.
///
/// [`in_days`]: GuaranteeDuration::in_days
///
/// # Examples
///
/// ```rust
/// use warranty::domain::GuaranteeDuration;
///
/// let guarantee = GuaranteeDuration::from_days(30);
/// assert_eq!(guarantee.in_days(), 30);
///
/// let two_weeks = GuaranteeDuration::from_weeks(2);
/// assert_eq!(two_weeks.in_days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuaranteeDuration {
    days: i64,
}

impl GuaranteeDuration {
    /// Creates a duration of the given number of days.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::GuaranteeDuration;
    ///
    /// let guarantee = GuaranteeDuration::from_days(30);
    /// assert_eq!(guarantee.in_days(), 30);
    /// ```
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self { days }
    }

    /// Creates a duration of the given number of weeks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::GuaranteeDuration;
    ///
    /// let guarantee = GuaranteeDuration::from_weeks(4);
    /// assert_eq!(guarantee.in_days(), 28);
    /// ```
    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Self {
        Self { days: weeks * 7 }
    }

    /// Creates a zero-length duration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::GuaranteeDuration;
    ///
    /// assert_eq!(GuaranteeDuration::zero().in_days(), 0);
    /// ```
    #[must_use]
    pub const fn zero() -> Self {
        Self { days: 0 }
    }

    /// Returns the duration as a whole number of days.
    #[must_use]
    pub const fn in_days(&self) -> i64 {
        self.days
    }

    /// Returns `true` if the duration is zero days.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0
    }

    /// Returns `true` if the duration is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.days < 0
    }

    /// Returns the duration as a `chrono::TimeDelta` for date arithmetic.
    ///
    /// Day counts beyond `TimeDelta`'s representable range saturate at its
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::GuaranteeDuration;
    ///
    /// let delta = GuaranteeDuration::from_days(30).as_time_delta();
    /// assert_eq!(delta.num_days(), 30);
    /// ```
    #[must_use]
    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::try_days(self.days).unwrap_or(if self.days < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        })
    }
}

impl ValueObject for GuaranteeDuration {}

impl fmt::Display for GuaranteeDuration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 1 {
            write!(formatter, "1 day")
        } else {
            write!(formatter, "{} days", self.days)
        }
    }
}

impl PartialOrd for GuaranteeDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GuaranteeDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days.cmp(&other.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Constructor Tests
    // =========================================================================

    #[rstest]
    fn from_days_stores_exact_day_count() {
        let guarantee = GuaranteeDuration::from_days(30);

        assert_eq!(guarantee.in_days(), 30);
    }

    #[rstest]
    #[case(1, 7)]
    #[case(2, 14)]
    #[case(0, 0)]
    #[case(-1, -7)]
    fn from_weeks_converts_to_days(#[case] weeks: i64, #[case] expected_days: i64) {
        let guarantee = GuaranteeDuration::from_weeks(weeks);

        assert_eq!(guarantee.in_days(), expected_days);
    }

    #[rstest]
    fn zero_has_no_days() {
        assert_eq!(GuaranteeDuration::zero().in_days(), 0);
        assert!(GuaranteeDuration::zero().is_zero());
    }

    #[rstest]
    fn negative_durations_are_accepted() {
        let guarantee = GuaranteeDuration::from_days(-5);

        assert_eq!(guarantee.in_days(), -5);
        assert!(guarantee.is_negative());
        assert!(!guarantee.is_zero());
    }

    // =========================================================================
    // as_time_delta Tests
    // =========================================================================

    #[rstest]
    fn as_time_delta_matches_day_count() {
        let guarantee = GuaranteeDuration::from_days(90);

        assert_eq!(guarantee.as_time_delta(), TimeDelta::days(90));
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(30, "30 days")]
    #[case(1, "1 day")]
    #[case(0, "0 days")]
    #[case(-5, "-5 days")]
    fn display_formats_day_count(#[case] days: i64, #[case] expected: &str) {
        assert_eq!(GuaranteeDuration::from_days(days).to_string(), expected);
    }

    // =========================================================================
    // Equality and Ordering Tests
    // =========================================================================

    #[rstest]
    fn equal_day_counts_compare_equal() {
        assert_eq!(
            GuaranteeDuration::from_days(14),
            GuaranteeDuration::from_weeks(2)
        );
    }

    #[rstest]
    fn ord_shorter_is_less() {
        let shorter = GuaranteeDuration::from_days(10);
        let longer = GuaranteeDuration::from_days(20);

        assert_eq!(shorter.cmp(&longer), Ordering::Less);
    }

    // =========================================================================
    // Serialization Tests
    // =========================================================================

    #[rstest]
    fn serialize_deserialize_roundtrip() {
        let original = GuaranteeDuration::from_days(30);
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: GuaranteeDuration = serde_json::from_str(&serialized).unwrap();

        assert_eq!(original, deserialized);
    }
}
