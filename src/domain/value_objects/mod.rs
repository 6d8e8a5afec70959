//! Value objects for the warranty domain.
//!
//! Value objects are immutable objects that have no identity. They are defined
//! only by their values and are used to describe characteristics or attributes
//! of domain entities.
//!
//! # Available Value Objects
//!
//! - [`CalendarDate`] - A day-granularity date with the time-of-day fixed at midnight
//! - [`GuaranteeDuration`] - A day-expressible duration for guarantee periods
//! - [`TermsAndConditions`] - The validity window and guarantee period of a warranty agreement
//!
//! # Design Principles
//!
//! All value objects in this module follow these principles:
//!
//! - **Immutability**: Once created, values cannot be changed
//! - **Value equality**: Two instances with the same values are considered equal
//! - **Side-effect free**: All operations are pure functions

use std::fmt;

mod calendar_date;
mod guarantee_duration;
mod terms_and_conditions;

pub use calendar_date::CalendarDate;
pub use guarantee_duration::GuaranteeDuration;
pub use terms_and_conditions::TermsAndConditions;

/// Structural equality for value objects.
///
/// Two value objects are "the same" when every field compares equal by value.
/// The type check the comparison implies is enforced statically: `is_same`
/// only accepts another instance of the same concrete type.
///
/// The default implementation delegates to [`PartialEq`], which for the value
/// objects in this crate is derived field-by-field.
///
/// # Examples
///
/// ```rust
/// use warranty::domain::{GuaranteeDuration, ValueObject};
///
/// let thirty = GuaranteeDuration::from_days(30);
/// let also_thirty = GuaranteeDuration::from_days(30);
///
/// assert!(thirty.is_same(&also_thirty));
/// ```
pub trait ValueObject: Clone + PartialEq + fmt::Debug {
    /// Returns `true` if `other` holds the same values as `self`.
    #[must_use]
    fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}
