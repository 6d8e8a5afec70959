//! Domain layer for the warranty application.
//!
//! The domain layer contains the core business logic and is completely
//! independent of infrastructure concerns. It follows Domain-Driven Design
//! principles.
//!
//! # Structure
//!
//! - [`value_objects`] - Immutable values that describe warranty concepts
//!
//! # Design Principles
//!
//! All code in this layer adheres to:
//!
//! - **Referential transparency**: Functions always return the same output for the same input
//! - **Pure functions**: No side effects (I/O, state mutation)
//! - **Immutability**: Data structures are never modified in place

pub mod value_objects;

pub use value_objects::*;
