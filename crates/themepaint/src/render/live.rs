//! Live painting onto a bound document.

use tracing::{debug, trace};

use super::document::Document;
use super::target::Target;
use crate::config::PaintConfig;
use crate::style::{Assignment, Property};
use crate::theme::Theme;

/// Result of painting a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The document was updated.
    Applied,
    /// The property is recognized but its value formats to nothing.
    Suppressed,
    /// The property name is not in the table; nothing was touched.
    Unrecognized,
    /// The painter has no document bound.
    NoDocument,
}

impl ApplyOutcome {
    pub fn is_applied(self) -> bool {
        self == ApplyOutcome::Applied
    }
}

/// Tally of a whole-theme paint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: usize,
    pub suppressed: usize,
    pub unrecognized: usize,
}

impl ApplyReport {
    fn record(&mut self, outcome: ApplyOutcome) {
        match outcome {
            ApplyOutcome::Applied => self.applied += 1,
            ApplyOutcome::Suppressed => self.suppressed += 1,
            ApplyOutcome::Unrecognized => self.unrecognized += 1,
            ApplyOutcome::NoDocument => {}
        }
    }
}

/// Paints theme properties onto a live document.
///
/// The painter owns its document binding, which may be absent; pass
/// `&mut doc` to keep ownership with the caller.
///
/// # Example
///
/// ```rust
/// use themepaint::{ApplyOutcome, MemoryDocument, Painter, Slot};
///
/// let mut doc = MemoryDocument::new();
/// let mut painter = Painter::new(&mut doc);
///
/// assert_eq!(painter.apply_live("hero", "marginTop", "12"), ApplyOutcome::Applied);
/// assert_eq!(painter.apply_live("hero", "sparkle", "yes"), ApplyOutcome::Unrecognized);
///
/// assert_eq!(doc.style("hero", Slot::Own, "margin-top"), Some("12px"));
/// ```
#[derive(Debug, Clone)]
pub struct Painter<D> {
    document: Option<D>,
    config: PaintConfig,
}

impl<D: Document> Painter<D> {
    /// Creates a painter bound to `document` with the default configuration.
    pub fn new(document: D) -> Self {
        Self {
            document: Some(document),
            config: PaintConfig::default(),
        }
    }

    /// Creates a painter with no document. Every paint reports
    /// [`ApplyOutcome::NoDocument`].
    pub fn detached() -> Self {
        Self {
            document: None,
            config: PaintConfig::default(),
        }
    }

    /// Replaces the configuration, returning the updated painter.
    pub fn with_config(mut self, config: PaintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Consumes the painter, returning its document binding.
    pub fn into_document(self) -> Option<D> {
        self.document
    }

    /// Paints one property of one element.
    ///
    /// Unrecognized properties and suppressed values leave the document
    /// untouched. Content properties (`image`, `text`) write markup without
    /// any escaping; sanitizing it is the caller's job.
    pub fn apply_live(&mut self, element_id: &str, property: &str, raw: &str) -> ApplyOutcome {
        let Some(document) = self.document.as_mut() else {
            debug!(element_id, property, "no document bound; skipping paint");
            return ApplyOutcome::NoDocument;
        };

        let Some(rule) = Property::from_name(property).map(Property::rule) else {
            debug!(element_id, property, "ignoring unrecognized theme property");
            return ApplyOutcome::Unrecognized;
        };

        match rule.resolve(raw, &self.config) {
            Assignment::Style {
                slot,
                attribute,
                value,
            } => {
                let target = Target::new(element_id, slot);
                trace!(selector = %target.selector(&self.config), attribute, value = %value, "painting style");
                document.set_style(&target, attribute, &value);
            }
            Assignment::Content { slot, html } => {
                let target = Target::new(element_id, slot);
                trace!(selector = %target.selector(&self.config), "painting content");
                document.set_content(&target, &html);
            }
            Assignment::Suppressed => {
                trace!(element_id, property, raw, "value formats to nothing; skipping");
                return ApplyOutcome::Suppressed;
            }
        }
        ApplyOutcome::Applied
    }

    /// Paints every property of every element, in theme order.
    ///
    /// Returns `None` if no document is bound.
    pub fn apply_theme(&mut self, theme: &Theme) -> Option<ApplyReport> {
        if self.document.is_none() {
            debug!(elements = theme.len(), "no document bound; skipping theme");
            return None;
        }

        let mut report = ApplyReport::default();
        for element in theme {
            for (property, raw) in element.iter() {
                report.record(self.apply_live(&element.id, property, raw));
            }
        }
        Some(report)
    }
}
