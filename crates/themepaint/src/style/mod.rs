//! Property table and value formatters.
//!
//! This module provides:
//!
//! - [`Property`]: every recognized theme property
//! - [`PropertyRule`]: a property's table entry and how it reaches the document
//! - [`Formatter`]: the closed set of raw-value formatters
//! - [`Assignment`]: the document change one value resolves to
//!
//! Both the live painter and the CSS exporter resolve values through
//! [`PropertyRule::resolve`], so the two outputs always agree.

pub mod formatter;
mod number;
mod property;

pub use formatter::Formatter;
pub use property::{Assignment, Property, PropertyRule, Usage};
