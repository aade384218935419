//! Theme data.
//!
//! A [`Theme`] is an ordered list of [`ElementStyle`] records, each holding
//! the raw property values for one element. Values are kept as the editor
//! stored them; interpretation happens in the renderers.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{ElementStyle, Theme};
