//! Terms and conditions value object.
//!
//! Models the validity window and guarantee period of a warranty agreement.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CalendarDate, GuaranteeDuration, ValueObject};

/// The terms and conditions of a warranty agreement.
///
/// `TermsAndConditions` bundles the validity window of a warranty (effective
/// through expiration, both inclusive), the purchase date of the underlying
/// product, and the length of a separate in-store guarantee period.
///
/// All three dates are normalized to day granularity at construction: any
/// time-of-day passed in is discarded. The object is immutable; "modifying"
/// operations such as [`extend_annually`] return a new instance and leave
/// the receiver untouched.
///
/// No relationship between the fields is enforced. An agreement whose
/// expiration precedes its effective date is accepted and is simply never
/// active; validating field ordering is the creator's responsibility.
///
/// [`extend_annually`]: TermsAndConditions::extend_annually
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use warranty::domain::{GuaranteeDuration, TermsAndConditions};
///
/// let terms = TermsAndConditions::new(
///     Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 12, 31, 17, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2023, 12, 15, 12, 0, 0).unwrap(),
///     GuaranteeDuration::from_days(30),
/// );
///
/// assert!(terms.is_active(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()));
///
/// let extended = terms.extend_annually();
/// assert_eq!(extended.expiration_date().to_string(), "2025-12-31");
/// assert_eq!(terms.expiration_date().to_string(), "2024-12-31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermsAndConditions {
    effective_date: CalendarDate,
    expiration_date: CalendarDate,
    purchase_date: CalendarDate,
    in_store_guarantee: GuaranteeDuration,
}

impl TermsAndConditions {
    /// Creates terms and conditions from UTC date-times, discarding each
    /// time-of-day.
    ///
    /// No validation is performed on the ordering of the dates or the sign
    /// of the guarantee duration; any values are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::{GuaranteeDuration, TermsAndConditions};
    ///
    /// let terms = TermsAndConditions::new(
    ///     Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
    ///     GuaranteeDuration::from_days(30),
    /// );
    ///
    /// // The 14:30 time component is gone after construction
    /// assert_eq!(
    ///     terms.effective_date().at_midnight(),
    ///     Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
    /// );
    /// ```
    #[must_use]
    pub fn new(
        effective_date: DateTime<Utc>,
        expiration_date: DateTime<Utc>,
        purchase_date: DateTime<Utc>,
        in_store_guarantee: GuaranteeDuration,
    ) -> Self {
        Self {
            effective_date: CalendarDate::from_datetime(effective_date),
            expiration_date: CalendarDate::from_datetime(expiration_date),
            purchase_date: CalendarDate::from_datetime(purchase_date),
            in_store_guarantee,
        }
    }

    /// Creates terms and conditions from already-normalized calendar dates.
    #[must_use]
    pub const fn from_dates(
        effective_date: CalendarDate,
        expiration_date: CalendarDate,
        purchase_date: CalendarDate,
        in_store_guarantee: GuaranteeDuration,
    ) -> Self {
        Self {
            effective_date,
            expiration_date,
            purchase_date,
            in_store_guarantee,
        }
    }

    /// Returns a new instance with the expiration date advanced by one
    /// calendar year.
    ///
    /// The advancement is calendar-aware: the year component is incremented
    /// and a February 29th expiration clamps to February 28th of the
    /// following year. All other fields are carried over unchanged, and the
    /// receiver is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::{GuaranteeDuration, TermsAndConditions};
    ///
    /// let terms = TermsAndConditions::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
    ///     GuaranteeDuration::from_days(30),
    /// );
    ///
    /// let extended = terms.extend_annually();
    /// assert_eq!(extended.expiration_date().to_string(), "2025-01-15");
    /// assert_eq!(extended.effective_date(), terms.effective_date());
    /// ```
    #[must_use]
    pub fn extend_annually(&self) -> Self {
        Self {
            expiration_date: self.expiration_date.plus_calendar_year(),
            ..*self
        }
    }

    /// Returns the in-store guarantee period as a whole number of days.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::{GuaranteeDuration, TermsAndConditions};
    ///
    /// let terms = TermsAndConditions::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
    ///     GuaranteeDuration::from_days(30),
    /// );
    ///
    /// assert_eq!(terms.in_store_guarantee_in_days(), 30);
    /// ```
    #[must_use]
    pub const fn in_store_guarantee_in_days(&self) -> i64 {
        self.in_store_guarantee.in_days()
    }

    /// Returns `true` if the warranty is active at the given instant.
    ///
    /// The instant is truncated to its calendar day before comparison, so
    /// the whole of the expiration day counts as active regardless of
    /// time-of-day. Both bounds of the validity window are inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use warranty::domain::{GuaranteeDuration, TermsAndConditions};
    ///
    /// let terms = TermsAndConditions::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
    ///     GuaranteeDuration::from_days(30),
    /// );
    ///
    /// // Late on the expiration day is still active
    /// assert!(terms.is_active(Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap()));
    /// // The day after is not
    /// assert!(!terms.is_active(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()));
    /// ```
    #[must_use]
    pub fn is_active(&self, compare_date: DateTime<Utc>) -> bool {
        self.is_active_on(CalendarDate::from_datetime(compare_date))
    }

    /// Returns `true` if the warranty is active on the given calendar day.
    ///
    /// Both bounds of the validity window are inclusive. An agreement whose
    /// expiration precedes its effective date is active on no day at all.
    #[must_use]
    pub fn is_active_on(&self, compare_date: CalendarDate) -> bool {
        self.effective_date.is_on_or_before(&compare_date)
            && self.expiration_date.is_on_or_after(&compare_date)
    }

    /// Returns the first day the warranty terms are active.
    #[must_use]
    pub const fn effective_date(&self) -> CalendarDate {
        self.effective_date
    }

    /// Returns the last day the warranty terms are active (inclusive).
    #[must_use]
    pub const fn expiration_date(&self) -> CalendarDate {
        self.expiration_date
    }

    /// Returns the day the underlying product was purchased.
    #[must_use]
    pub const fn purchase_date(&self) -> CalendarDate {
        self.purchase_date
    }

    /// Returns the in-store guarantee duration.
    #[must_use]
    pub const fn in_store_guarantee_duration(&self) -> GuaranteeDuration {
        self.in_store_guarantee
    }
}

impl ValueObject for TermsAndConditions {}

impl fmt::Display for TermsAndConditions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "effective {} through {}, purchased {}, {} in-store guarantee",
            self.effective_date, self.expiration_date, self.purchase_date, self.in_store_guarantee,
        )
    }
}
