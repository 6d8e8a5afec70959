//! Calendar date value object.
//!
//! Provides a day-granularity date whose time-of-day is always midnight.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ValueObject;

/// A calendar day with the time-of-day fixed at 00:00:00.
///
/// `CalendarDate` wraps `chrono::NaiveDate` to provide:
///
/// - **Midnight normalization by construction**: a `NaiveDate` carries no
///   time component, so the "truncated to midnight" invariant cannot be
///   violated after construction
/// - **Calendar arithmetic**: year advancement that respects month lengths
///   and leap days rather than shifting by a fixed number of days
/// - **Ordering**: Implements `Ord` for sorting and comparison
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use warranty::domain::CalendarDate;
///
/// // Any time-of-day is discarded at construction
/// let date = CalendarDate::from_datetime(Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap());
/// assert_eq!(date.to_string(), "2024-03-10");
/// assert_eq!(date.at_midnight(), Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a calendar date from a UTC date-time, discarding the time-of-day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::CalendarDate;
    ///
    /// let morning = CalendarDate::from_datetime(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
    /// let evening = CalendarDate::from_datetime(Utc.with_ymd_and_hms(2024, 1, 15, 21, 0, 0).unwrap());
    ///
    /// assert_eq!(morning, evening);
    /// ```
    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.date_naive())
    }

    /// Creates a calendar date from year, month, and day components.
    ///
    /// # Returns
    ///
    /// * `Some(CalendarDate)` if the components form a valid calendar day
    /// * `None` otherwise (e.g. February 30th)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::CalendarDate;
    ///
    /// assert!(CalendarDate::from_ymd(2024, 2, 29).is_some()); // leap year
    /// assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
    /// ```
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a calendar date from a string.
    ///
    /// Supported formats:
    /// - `2024-01-15`
    /// - `2024-01-15T10:30:00Z` (time-of-day discarded)
    /// - `2024-01-15T10:30:00` (time-of-day discarded, assumed UTC)
    ///
    /// # Returns
    ///
    /// * `Some(CalendarDate)` if parsing succeeds
    /// * `None` if parsing fails
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::CalendarDate;
    ///
    /// let date = CalendarDate::parse("2024-01-15");
    /// assert!(date.is_some());
    ///
    /// let from_datetime = CalendarDate::parse("2024-01-15T10:30:00Z");
    /// assert_eq!(date, from_datetime);
    ///
    /// let invalid = CalendarDate::parse("not-a-date");
    /// assert!(invalid.is_none());
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(Self(date));
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(datetime.with_timezone(&Utc).date_naive()));
        }

        // Date-time without timezone (assume UTC)
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
            return Some(Self(naive.date()));
        }

        None
    }

    /// Returns this day as a UTC date-time at 00:00:00.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::CalendarDate;
    ///
    /// let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
    /// assert_eq!(date.at_midnight(), Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    /// ```
    #[must_use]
    pub fn at_midnight(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.0.and_time(NaiveTime::MIN))
    }

    /// Returns this date advanced by one calendar year.
    ///
    /// The year component is incremented and the day is adjusted for month
    /// overflow: February 29th advances to February 28th of the following
    /// year. This is not a fixed 365/366-day shift.
    ///
    /// Dates beyond chrono's representable range (year 262142) saturate by
    /// returning the date unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::CalendarDate;
    ///
    /// let expiration = CalendarDate::from_ymd(2024, 1, 15).unwrap();
    /// assert_eq!(expiration.plus_calendar_year(), CalendarDate::from_ymd(2025, 1, 15).unwrap());
    ///
    /// let leap_day = CalendarDate::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.plus_calendar_year(), CalendarDate::from_ymd(2025, 2, 28).unwrap());
    /// ```
    #[must_use]
    pub fn plus_calendar_year(&self) -> Self {
        self.0
            .checked_add_months(Months::new(12))
            .map_or(*self, Self)
    }

    /// Returns `true` if this date falls on or before another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::CalendarDate;
    ///
    /// let jan = CalendarDate::from_ymd(2024, 1, 1).unwrap();
    /// let feb = CalendarDate::from_ymd(2024, 2, 1).unwrap();
    ///
    /// assert!(jan.is_on_or_before(&feb));
    /// assert!(jan.is_on_or_before(&jan));
    /// assert!(!feb.is_on_or_before(&jan));
    /// ```
    #[must_use]
    pub fn is_on_or_before(&self, other: &Self) -> bool {
        self.0 <= other.0
    }

    /// Returns `true` if this date falls on or after another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warranty::domain::CalendarDate;
    ///
    /// let jan = CalendarDate::from_ymd(2024, 1, 1).unwrap();
    /// let feb = CalendarDate::from_ymd(2024, 2, 1).unwrap();
    ///
    /// assert!(feb.is_on_or_after(&jan));
    /// assert!(feb.is_on_or_after(&feb));
    /// assert!(!jan.is_on_or_after(&feb));
    /// ```
    #[must_use]
    pub fn is_on_or_after(&self, other: &Self) -> bool {
        self.0 >= other.0
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub const fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for CalendarDate {}

impl fmt::Display for CalendarDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}
