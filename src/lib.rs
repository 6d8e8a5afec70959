//! Warranty Domain Sample
//!
//! A Domain-Driven Design sample modeling the terms and conditions of a
//! warranty agreement as immutable value objects.
//!
//! # Architecture
//!
//! The crate contains a single layer:
//!
//! - **Domain Layer**: Pure business logic — value objects only, no I/O,
//!   no infrastructure concerns
//!
//! # Design Principles
//!
//! - **Immutability**: value objects are never modified in place; any
//!   "modification" produces a new instance
//! - **Value equality**: instances are compared by their contained values,
//!   never by identity
//! - **Side-effect free**: all operations are pure functions
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use warranty::domain::{GuaranteeDuration, TermsAndConditions};
//!
//! let terms = TermsAndConditions::new(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 12, 31, 17, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 12, 15, 12, 0, 0).unwrap(),
//!     GuaranteeDuration::from_days(30),
//! );
//!
//! assert!(terms.is_active(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
//! assert_eq!(terms.in_store_guarantee_in_days(), 30);
//! ```

pub mod domain;
