//! Value formatters.
//!
//! Each formatter turns a raw theme string into a presentation value. They
//! never fail: malformed input flows through as best-effort output. A
//! formatter may decline to produce a value at all, in which case nothing
//! is assigned or emitted for the property.

use super::number;

/// Shadow used for the `light` text shadow keyword.
pub const LIGHT_SHADOW: &str = "1px 1px 1px #FFF";

/// Shadow used for the `dark` text shadow keyword.
pub const DARK_SHADOW: &str = "1px 1px 1px #000";

/// The closed set of value formatters a property can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// Returns the value unchanged.
    Passthrough,
    /// Ensures a single `px` suffix.
    Pixel,
    /// `"true"` becomes `italic`, anything else `normal`.
    ItalicToggle,
    /// `"true"` becomes `underline`, anything else `none`.
    UnderlineToggle,
    /// Ensures a single leading `#`.
    HexNormalize,
    /// Wraps the value in `url(...)`, or `none` when unset.
    BackgroundImageUrl,
    /// Wraps the value in `url(...)`, or produces nothing when unset.
    BackgroundPatternUrl,
    /// Scales a 0-10 value into a fractional opacity string.
    DecimalTenths,
    /// Maps boolean strings to `bold`/`normal`, passing numeric weights through.
    FontWeight,
    /// Maps `light`/`dark` to a fixed shadow.
    TextShadow,
}

impl Formatter {
    /// Formats `raw`, returning `None` when the property should not be emitted.
    ///
    /// Empty results are treated the same as no result.
    ///
    /// `patterns` is the optional base URL for background patterns; other
    /// formatters ignore it.
    pub fn format(self, raw: &str, patterns: Option<&str>) -> Option<String> {
        let value = match self {
            Formatter::Passthrough => raw.to_string(),
            Formatter::Pixel => pixel(raw),
            Formatter::ItalicToggle => italic_toggle(raw).to_string(),
            Formatter::UnderlineToggle => underline_toggle(raw).to_string(),
            Formatter::HexNormalize => hex_normalize(raw),
            Formatter::BackgroundImageUrl => background_image_url(raw),
            Formatter::BackgroundPatternUrl => background_pattern_url(raw, patterns)?,
            Formatter::DecimalTenths => decimal_tenths(raw),
            Formatter::FontWeight => font_weight(raw).to_string(),
            Formatter::TextShadow => text_shadow(raw).to_string(),
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Appends `px`, dropping an existing `px` suffix first.
pub fn pixel(raw: &str) -> String {
    format!("{}px", raw.strip_suffix("px").unwrap_or(raw))
}

pub fn italic_toggle(raw: &str) -> &'static str {
    if raw == "true" {
        "italic"
    } else {
        "normal"
    }
}

pub fn underline_toggle(raw: &str) -> &'static str {
    if raw == "true" {
        "underline"
    } else {
        "none"
    }
}

/// Prefixes `#`, dropping an existing leading `#` first.
pub fn hex_normalize(raw: &str) -> String {
    format!("#{}", raw.strip_prefix('#').unwrap_or(raw))
}

pub fn background_image_url(raw: &str) -> String {
    if is_unset(raw) {
        "none".to_string()
    } else {
        format!("url({raw})")
    }
}

/// Builds a pattern URL, or `None` when no pattern is selected.
///
/// With a `patterns` base the value names a PNG under that base.
pub fn background_pattern_url(raw: &str, patterns: Option<&str>) -> Option<String> {
    if is_unset(raw) {
        return None;
    }
    Some(match patterns {
        Some(base) => format!("url({base}{raw}.png)"),
        None => format!("url({raw})"),
    })
}

/// Converts a 0-10 opacity step into a decimal string.
///
/// The result is a literal `.` followed by the tenth of the value, so `"5"`
/// yields `.0.5` rather than `.5`. Only multiples of ten land on a clean
/// decimal (`"50"` yields `.5`). Stored themes depend on this output, so it
/// is kept as-is.
pub fn decimal_tenths(raw: &str) -> String {
    if raw.is_empty() {
        return "0".to_string();
    }
    format!(".{}", number::display(number::coerce(raw) / 10.0))
}

pub fn font_weight(raw: &str) -> &str {
    match raw {
        "true" => "bold",
        "false" => "normal",
        other => other,
    }
}

pub fn text_shadow(raw: &str) -> &'static str {
    match raw {
        "light" => LIGHT_SHADOW,
        "dark" => DARK_SHADOW,
        _ => "none",
    }
}

fn is_unset(raw: &str) -> bool {
    raw.is_empty() || raw == "false"
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(
            Formatter::Passthrough.format("no-repeat", None),
            Some("no-repeat".to_string())
        );
    }

    #[test]
    fn test_passthrough_empty_is_suppressed() {
        assert_eq!(Formatter::Passthrough.format("", None), None);
    }

    #[test]
    fn test_pixel() {
        assert_eq!(pixel("10"), "10px");
        assert_eq!(pixel("10px"), "10px");
        assert_eq!(pixel(""), "px");
    }

    #[test]
    fn test_toggles() {
        assert_eq!(italic_toggle("true"), "italic");
        assert_eq!(italic_toggle("false"), "normal");
        assert_eq!(italic_toggle("TRUE"), "normal");
        assert_eq!(underline_toggle("true"), "underline");
        assert_eq!(underline_toggle("yes"), "none");
    }

    #[test]
    fn test_hex_normalize() {
        assert_eq!(hex_normalize("ff0000"), "#ff0000");
        assert_eq!(hex_normalize("#ff0000"), "#ff0000");
    }

    #[test]
    fn test_background_image_url() {
        assert_eq!(background_image_url("/a.jpg"), "url(/a.jpg)");
        assert_eq!(background_image_url("false"), "none");
        assert_eq!(background_image_url(""), "none");
    }

    #[test]
    fn test_background_pattern_url() {
        assert_eq!(
            background_pattern_url("dots.png", None),
            Some("url(dots.png)".to_string())
        );
        assert_eq!(
            background_pattern_url("dots", Some("/patterns/")),
            Some("url(/patterns/dots.png)".to_string())
        );
        assert_eq!(background_pattern_url("false", None), None);
        assert_eq!(background_pattern_url("", Some("/patterns/")), None);
    }

    #[test]
    fn test_pattern_false_is_suppressed() {
        assert_eq!(Formatter::BackgroundPatternUrl.format("false", None), None);
    }

    // The double decimal point is long-standing output, not a typo.
    #[test]
    fn test_decimal_tenths_keeps_literal_concatenation() {
        assert_eq!(decimal_tenths("5"), ".0.5");
        assert_eq!(decimal_tenths("50"), ".5");
        assert_eq!(decimal_tenths("10"), ".1");
        assert_eq!(decimal_tenths("0"), ".0");
        assert_eq!(decimal_tenths("7.5"), ".0.75");
    }

    #[test]
    fn test_decimal_tenths_loose_numerals() {
        assert_eq!(decimal_tenths("0x10"), ".1.6");
        assert_eq!(decimal_tenths("1e22"), ".1e+21");
        assert_eq!(decimal_tenths("0.000001"), ".1e-7");
    }

    #[test]
    fn test_decimal_tenths_empty_is_zero() {
        assert_eq!(decimal_tenths(""), "0");
    }

    #[test]
    fn test_decimal_tenths_garbage_is_nan() {
        assert_eq!(decimal_tenths("abc"), ".NaN");
    }

    #[test]
    fn test_font_weight() {
        assert_eq!(font_weight("true"), "bold");
        assert_eq!(font_weight("false"), "normal");
        assert_eq!(font_weight("600"), "600");
    }

    #[test]
    fn test_font_weight_empty_is_suppressed() {
        assert_eq!(Formatter::FontWeight.format("", None), None);
    }

    #[test]
    fn test_text_shadow() {
        assert_eq!(text_shadow("light"), "1px 1px 1px #FFF");
        assert_eq!(text_shadow("dark"), "1px 1px 1px #000");
        assert_eq!(text_shadow("Dark"), "none");
    }

    proptest! {
        #[test]
        fn prop_pixel_is_idempotent(raw in "[0-9a-z.]{0,8}(px)?") {
            let once = pixel(&raw);
            prop_assert_eq!(pixel(&once), once);
        }

        #[test]
        fn prop_hex_normalize_is_idempotent(raw in "#?[0-9a-fA-F]{0,8}") {
            let once = hex_normalize(&raw);
            prop_assert_eq!(hex_normalize(&once), once);
        }

        #[test]
        fn prop_formatters_never_yield_empty(raw in ".{0,12}") {
            let all = [
                Formatter::Passthrough,
                Formatter::Pixel,
                Formatter::ItalicToggle,
                Formatter::UnderlineToggle,
                Formatter::HexNormalize,
                Formatter::BackgroundImageUrl,
                Formatter::BackgroundPatternUrl,
                Formatter::DecimalTenths,
                Formatter::FontWeight,
                Formatter::TextShadow,
            ];
            for formatter in all {
                if let Some(value) = formatter.format(&raw, None) {
                    prop_assert!(!value.is_empty());
                }
            }
        }
    }
}
