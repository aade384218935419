//! Addressing themed elements.

use std::fmt;

use crate::config::PaintConfig;

/// The part of a themed element a value is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The element itself.
    Own,
    /// The nested overlay used for background effects.
    Overlay,
    /// The image content slot.
    Image,
    /// The text content slot.
    Text,
}

/// A slot of the element(s) carrying a given theme id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<'a> {
    pub element_id: &'a str,
    pub slot: Slot,
}

impl<'a> Target<'a> {
    pub fn new(element_id: &'a str, slot: Slot) -> Self {
        Self { element_id, slot }
    }

    /// Returns a displayable CSS selector for this target.
    ///
    /// ```rust
    /// use themepaint::{PaintConfig, Slot, Target};
    ///
    /// let config = PaintConfig::default();
    /// let target = Target::new("hero", Slot::Overlay);
    /// assert_eq!(target.selector(&config).to_string(), r#"[swyg="hero"] [swyg-overlay]"#);
    /// ```
    pub fn selector<'c>(&self, config: &'c PaintConfig) -> Selector<'a, 'c> {
        Selector {
            target: *self,
            config,
        }
    }
}

/// A [`Target`] rendered against a [`PaintConfig`].
///
/// The element id is written as a CSS string, so ids containing quotes or
/// backslashes stay inside the attribute selector.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a, 'c> {
    target: Target<'a>,
    config: &'c PaintConfig,
}

impl fmt::Display for Selector<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}=", self.config.id_attribute)?;
        cssparser::serialize_string(self.target.element_id, f)?;
        f.write_str("]")?;

        let nested = match self.target.slot {
            Slot::Own => return Ok(()),
            Slot::Overlay => &self.config.overlay_selector,
            Slot::Image => &self.config.image_slot,
            Slot::Text => &self.config.text_slot,
        };
        write!(f, " {nested}")
    }
}
