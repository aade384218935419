//! # Themepaint - themes painted live or exported as CSS
//!
//! A theme is an ordered list of elements, each with raw property values
//! such as `bgColor: "ff0000"` or `marginTop: "10"`. Themepaint turns those
//! values into presentation values through a fixed property table and
//! delivers them two ways:
//!
//! - [`Painter`] writes them to a live document you bind through the
//!   [`Document`] trait, one property at a time as an editor changes them
//! - [`CssExporter`] (or [`export_css`]) renders the whole theme as a
//!   stylesheet for a compiled site
//!
//! Both go through the same table, so a page painted live and a page
//! styled by the exported stylesheet look the same.
//!
//! ## Quick start
//!
//! ```rust
//! use themepaint::{export_css, ElementStyle, MemoryDocument, Painter, Slot, Theme};
//!
//! let theme = Theme::new().add(
//!     ElementStyle::new("hero")
//!         .add("bgColor", "ff0000")
//!         .add("marginTop", "10")
//!         .add("bgEffectsOpacity", "50"),
//! );
//!
//! assert_eq!(
//!     export_css(&theme),
//!     r#"[swyg="hero"]{background-color:#ff0000;margin-top:10px;}[swyg="hero"] [swyg-overlay]{opacity:.5;}"#
//! );
//!
//! let mut doc = MemoryDocument::new();
//! Painter::new(&mut doc).apply_theme(&theme);
//! assert_eq!(doc.style("hero", Slot::Overlay, "opacity"), Some(".5"));
//! ```
//!
//! ## Unknown properties
//!
//! Property names outside the table are ignored by both renderers, so
//! themes saved by other editor versions still render.

pub mod config;
pub mod render;
pub mod style;
pub mod theme;

pub use config::{ConfigError, ExportOptions, PaintConfig};
pub use render::{
    ApplyOutcome, ApplyReport, CssExporter, Document, MemoryDocument, Painter, Selector, Slot,
    Target,
};
pub use style::{Assignment, Formatter, Property, PropertyRule, Usage};
pub use theme::{ElementStyle, Theme};

/// Exports a theme as CSS using the default configuration.
pub fn export_css(theme: &Theme) -> String {
    CssExporter::default().export(theme)
}
