//! Static stylesheet export.

use tracing::debug;

use super::target::{Slot, Target};
use crate::config::PaintConfig;
use crate::style::{Assignment, Property};
use crate::theme::{ElementStyle, Theme};

/// Renders a [`Theme`] as stylesheet text.
///
/// Each element produces a block for itself followed by a block for its
/// overlay, with declarations in theme order:
///
/// ```text
/// [swyg="hero"]{background-color:#ff0000;margin-top:10px;}[swyg="hero"] [swyg-overlay]{}
/// ```
///
/// Content properties (`image`, `text`) have no stylesheet form and are
/// skipped, as are unrecognized and suppressed properties. Empty blocks are
/// kept unless [`ExportOptions::skip_empty_blocks`](crate::ExportOptions)
/// is set.
#[derive(Debug, Clone, Copy)]
pub struct CssExporter<'c> {
    config: &'c PaintConfig,
}

impl Default for CssExporter<'static> {
    fn default() -> Self {
        Self::new(PaintConfig::shared_default())
    }
}

impl<'c> CssExporter<'c> {
    pub fn new(config: &'c PaintConfig) -> Self {
        Self { config }
    }

    /// Exports every element of `theme`, in order.
    pub fn export(&self, theme: &Theme) -> String {
        let mut css = String::new();
        for element in theme {
            self.export_element(element, &mut css);
        }
        css
    }

    fn export_element(&self, element: &ElementStyle, css: &mut String) {
        let mut own = Vec::new();
        let mut overlay = Vec::new();

        for (name, raw) in element.iter() {
            let Some(property) = Property::from_name(name) else {
                debug!(element_id = %element.id, property = name, "dropping unrecognized theme property");
                continue;
            };

            match property.rule().resolve(raw, self.config) {
                Assignment::Style {
                    slot: Slot::Overlay,
                    attribute,
                    value,
                } => overlay.push((attribute, value)),
                Assignment::Style {
                    attribute, value, ..
                } => own.push((attribute, value)),
                Assignment::Content { .. } | Assignment::Suppressed => {}
            }
        }

        self.write_block(css, Target::new(&element.id, Slot::Own), &own);
        self.write_block(css, Target::new(&element.id, Slot::Overlay), &overlay);
    }

    fn write_block(&self, css: &mut String, target: Target<'_>, declarations: &[(&str, String)]) {
        if declarations.is_empty() && self.config.export.skip_empty_blocks {
            return;
        }

        css.push_str(&target.selector(self.config).to_string());
        css.push('{');
        for (attribute, value) in declarations {
            css.push_str(attribute);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        css.push('}');
    }
}
