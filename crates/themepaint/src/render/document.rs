//! Document binding for live painting.
//!
//! The live painter never queries or builds a document itself. Callers
//! supply a [`Document`] that knows how to find the elements a [`Target`]
//! addresses (for example by running `target.selector(config)` against a
//! DOM) and how to write styles and content to them.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::target::{Slot, Target};

/// The minimal mutation surface the live painter needs.
///
/// Implementations apply each call to every element matching the target;
/// a target matching nothing is a no-op.
pub trait Document {
    /// Sets a named style attribute.
    fn set_style(&mut self, target: &Target<'_>, attribute: &str, value: &str);

    /// Replaces the inner content with the given markup.
    fn set_content(&mut self, target: &Target<'_>, html: &str);
}

impl<D: Document + ?Sized> Document for &mut D {
    fn set_style(&mut self, target: &Target<'_>, attribute: &str, value: &str) {
        (**self).set_style(target, attribute, value);
    }

    fn set_content(&mut self, target: &Target<'_>, html: &str) {
        (**self).set_content(target, html);
    }
}

type SlotKey = (String, Slot);

/// An in-memory document that records what was painted.
///
/// Styles are kept per element slot in assignment order; a later write to
/// the same attribute replaces the earlier value in place. Created with
/// [`MemoryDocument::with_elements`], only the listed element ids match,
/// mirroring a page where other ids select nothing.
///
/// ```rust
/// use themepaint::{MemoryDocument, Painter, Slot};
///
/// let mut painter = Painter::new(MemoryDocument::new());
/// painter.apply_live("hero", "bgColor", "ff0000");
///
/// let doc = painter.into_document().unwrap();
/// assert_eq!(doc.style("hero", Slot::Own, "background-color"), Some("#ff0000"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Option<HashSet<String>>,
    styles: IndexMap<SlotKey, IndexMap<String, String>>,
    contents: IndexMap<SlotKey, String>,
}

impl MemoryDocument {
    /// Creates a document in which every element id matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document containing only the given element ids.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Returns the value of a style attribute, if it was set.
    pub fn style(&self, element_id: &str, slot: Slot, attribute: &str) -> Option<&str> {
        self.styles(element_id, slot)?
            .get(attribute)
            .map(String::as_str)
    }

    /// Returns all style attributes set on a slot, in assignment order.
    pub fn styles(&self, element_id: &str, slot: Slot) -> Option<&IndexMap<String, String>> {
        self.styles.get(&(element_id.to_string(), slot))
    }

    /// Returns the content written to a slot, if any.
    pub fn content(&self, element_id: &str, slot: Slot) -> Option<&str> {
        self.contents
            .get(&(element_id.to_string(), slot))
            .map(String::as_str)
    }

    /// Returns `true` if nothing has been painted.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.contents.is_empty()
    }

    fn matches(&self, element_id: &str) -> bool {
        self.elements
            .as_ref()
            .is_none_or(|elements| elements.contains(element_id))
    }
}

impl Document for MemoryDocument {
    fn set_style(&mut self, target: &Target<'_>, attribute: &str, value: &str) {
        if !self.matches(target.element_id) {
            return;
        }
        self.styles
            .entry((target.element_id.to_string(), target.slot))
            .or_default()
            .insert(attribute.to_string(), value.to_string());
    }

    fn set_content(&mut self, target: &Target<'_>, html: &str) {
        if !self.matches(target.element_id) {
            return;
        }
        self.contents.insert(
            (target.element_id.to_string(), target.slot),
            html.to_string(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_styles_in_order() {
        let mut doc = MemoryDocument::new();
        doc.set_style(&Target::new("a", Slot::Own), "color", "#000");
        doc.set_style(&Target::new("a", Slot::Own), "margin-top", "1px");
        doc.set_style(&Target::new("a", Slot::Own), "color", "#fff");

        let styles = doc.styles("a", Slot::Own).unwrap();
        let pairs: Vec<_> = styles.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("color", "#fff"), ("margin-top", "1px")]);
    }

    #[test]
    fn test_slots_are_separate() {
        let mut doc = MemoryDocument::new();
        doc.set_style(&Target::new("a", Slot::Overlay), "opacity", ".5");
        assert_eq!(doc.style("a", Slot::Overlay, "opacity"), Some(".5"));
        assert_eq!(doc.style("a", Slot::Own, "opacity"), None);
    }

    #[test]
    fn test_unknown_element_matches_nothing() {
        let mut doc = MemoryDocument::with_elements(["hero"]);
        doc.set_style(&Target::new("footer", Slot::Own), "color", "#000");
        doc.set_content(&Target::new("footer", Slot::Text), "hi");
        assert!(doc.is_empty());

        doc.set_content(&Target::new("hero", Slot::Text), "hi");
        assert_eq!(doc.content("hero", Slot::Text), Some("hi"));
    }

    #[test]
    fn test_mut_ref_is_a_document() {
        fn paint(mut doc: impl Document) {
            doc.set_style(&Target::new("x", Slot::Own), "color", "#123");
        }

        let mut doc = MemoryDocument::new();
        paint(&mut doc);
        assert_eq!(doc.style("x", Slot::Own, "color"), Some("#123"));
    }
}
