//! Lowercase the first character of a text value, leaving the rest unchanged.
//!
//! The contract is three-way: absent input stays absent, empty input stays
//! empty, and non-empty input gets its first character lowercased with the
//! remainder copied verbatim. [`uncapitalize`] takes the string directly;
//! [`uncapitalize_opt`] mirrors nullability through `Option` for callers
//! whose input may be missing.
//!
//! ```
//! use uncapitalize::{uncapitalize, uncapitalize_opt};
//!
//! assert_eq!(uncapitalize("Hello"), "hello");
//! assert_eq!(uncapitalize_opt(None), None);
//! ```

pub mod case;

pub use case::{uncapitalize, uncapitalize_opt};
