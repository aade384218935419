//! The property table.
//!
//! Every theme property the renderers understand is a [`Property`]
//! variant, and each variant maps to exactly one [`PropertyRule`]. Names
//! that do not parse to a variant are ignored by both renderers so that
//! themes written by newer or older editors still render.

use crate::config::PaintConfig;
use crate::render::Slot;

use super::formatter::{self, Formatter};

/// A recognized theme property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Image,
    Text,
    BgEffectsOpacity,
    BgEffectsColor,
    MarginTop,
    MarginBottom,
    MarginRight,
    MarginLeft,
    BgImage,
    BgPattern,
    BgImageRepeat,
    BgImageSize,
    BgColor,
    TextStrong,
    TextItalic,
    TextUnderline,
    TextAlign,
    TextFont,
    TextSize,
    TextHeight,
    TextColor,
    TextShadow,
}

impl Property {
    /// All properties, in table order.
    pub const ALL: [Property; 22] = [
        Property::Image,
        Property::Text,
        Property::BgEffectsOpacity,
        Property::BgEffectsColor,
        Property::MarginTop,
        Property::MarginBottom,
        Property::MarginRight,
        Property::MarginLeft,
        Property::BgImage,
        Property::BgPattern,
        Property::BgImageRepeat,
        Property::BgImageSize,
        Property::BgColor,
        Property::TextStrong,
        Property::TextItalic,
        Property::TextUnderline,
        Property::TextAlign,
        Property::TextFont,
        Property::TextSize,
        Property::TextHeight,
        Property::TextColor,
        Property::TextShadow,
    ];

    /// Looks up a property by its theme name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let property = match name {
            "image" => Property::Image,
            "text" => Property::Text,
            "bgEffectsOpacity" => Property::BgEffectsOpacity,
            "bgEffectsColor" => Property::BgEffectsColor,
            "marginTop" => Property::MarginTop,
            "marginBottom" => Property::MarginBottom,
            "marginRight" => Property::MarginRight,
            "marginLeft" => Property::MarginLeft,
            "bgImage" => Property::BgImage,
            "bgPattern" => Property::BgPattern,
            "bgImageRepeat" => Property::BgImageRepeat,
            "bgImageSize" => Property::BgImageSize,
            "bgColor" => Property::BgColor,
            "textStrong" => Property::TextStrong,
            "textItalic" => Property::TextItalic,
            "textUnderline" => Property::TextUnderline,
            "textAlign" => Property::TextAlign,
            "textFont" => Property::TextFont,
            "textSize" => Property::TextSize,
            "textHeight" => Property::TextHeight,
            "textColor" => Property::TextColor,
            "textShadow" => Property::TextShadow,
            _ => return None,
        };
        Some(property)
    }

    /// The theme name of this property.
    pub const fn name(self) -> &'static str {
        self.rule().name
    }

    /// The table entry for this property.
    pub const fn rule(self) -> PropertyRule {
        use Formatter::*;

        let (name, usage) = match self {
            Property::Image => ("image", Usage::ImageEmbed),
            Property::Text => ("text", Usage::TextEmbed),
            Property::BgEffectsOpacity => ("bgEffectsOpacity", Usage::EffectOpacity),
            Property::BgEffectsColor => ("bgEffectsColor", Usage::EffectColor),
            Property::MarginTop => ("marginTop", Usage::Style(Pixel, "margin-top")),
            Property::MarginBottom => ("marginBottom", Usage::Style(Pixel, "margin-bottom")),
            Property::MarginRight => ("marginRight", Usage::Style(Pixel, "margin-right")),
            Property::MarginLeft => ("marginLeft", Usage::Style(Pixel, "margin-left")),
            Property::BgImage => (
                "bgImage",
                Usage::Style(BackgroundImageUrl, "background-image"),
            ),
            Property::BgPattern => (
                "bgPattern",
                Usage::Style(BackgroundPatternUrl, "background-image"),
            ),
            Property::BgImageRepeat => (
                "bgImageRepeat",
                Usage::Style(Passthrough, "background-repeat"),
            ),
            Property::BgImageSize => ("bgImageSize", Usage::Style(Passthrough, "background-size")),
            Property::BgColor => ("bgColor", Usage::Style(HexNormalize, "background-color")),
            Property::TextStrong => ("textStrong", Usage::Style(FontWeight, "font-weight")),
            Property::TextItalic => ("textItalic", Usage::Style(ItalicToggle, "font-style")),
            Property::TextUnderline => (
                "textUnderline",
                Usage::Style(UnderlineToggle, "text-decoration"),
            ),
            Property::TextAlign => ("textAlign", Usage::Style(Passthrough, "text-align")),
            Property::TextFont => ("textFont", Usage::Style(Passthrough, "font-family")),
            Property::TextSize => ("textSize", Usage::Style(Pixel, "font-size")),
            Property::TextHeight => ("textHeight", Usage::Style(Pixel, "line-height")),
            Property::TextColor => ("textColor", Usage::Style(HexNormalize, "color")),
            Property::TextShadow => ("textShadow", Usage::Style(TextShadow, "text-shadow")),
        };

        PropertyRule {
            property: self,
            name,
            usage,
        }
    }
}

/// How a property's value reaches the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// Formatted and written to a style attribute of the element itself.
    Style(Formatter, &'static str),
    /// Replaces the image slot's content with an image referencing the value.
    ImageEmbed,
    /// Replaces the text slot's content with the value verbatim.
    TextEmbed,
    /// Written as the overlay's `background-color`.
    EffectColor,
    /// Written as the overlay's `opacity`.
    EffectOpacity,
}

/// One row of the property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyRule {
    pub property: Property,
    pub name: &'static str,
    pub usage: Usage,
}

impl PropertyRule {
    /// The element's own style attribute this rule writes, if any.
    pub fn style_attribute(&self) -> Option<&'static str> {
        match self.usage {
            Usage::Style(_, attribute) => Some(attribute),
            _ => None,
        }
    }

    /// Works out what writing `raw` through this rule does to the document.
    pub fn resolve(&self, raw: &str, config: &PaintConfig) -> Assignment {
        match self.usage {
            Usage::Style(formatter, attribute) => {
                match formatter.format(raw, config.patterns.as_deref()) {
                    Some(value) => Assignment::Style {
                        slot: Slot::Own,
                        attribute,
                        value,
                    },
                    None => Assignment::Suppressed,
                }
            }
            Usage::ImageEmbed => Assignment::Content {
                slot: Slot::Image,
                html: format!("<img src=\"{raw}\" />"),
            },
            Usage::TextEmbed => Assignment::Content {
                slot: Slot::Text,
                html: raw.to_string(),
            },
            Usage::EffectColor => Assignment::Style {
                slot: Slot::Overlay,
                attribute: "background-color",
                value: formatter::hex_normalize(raw),
            },
            Usage::EffectOpacity => Assignment::Style {
                slot: Slot::Overlay,
                attribute: "opacity",
                value: formatter::decimal_tenths(raw),
            },
        }
    }
}

/// The document change a single property value resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Set a style attribute on a slot.
    Style {
        slot: Slot,
        attribute: &'static str,
        value: String,
    },
    /// Replace a slot's inner content.
    Content { slot: Slot, html: String },
    /// The formatter produced no value; nothing is written.
    Suppressed,
}
