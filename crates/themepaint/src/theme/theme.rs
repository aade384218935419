//! Theme and element style records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The raw property values of one themed element.
///
/// Property order is declaration order and is preserved through
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Value of the element's id attribute in the document.
    pub id: String,
    /// Property name to raw value.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl ElementStyle {
    /// Creates an element with no properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: IndexMap::new(),
        }
    }

    /// Sets a property, returning the updated element for chaining.
    ///
    /// Setting an existing property replaces its value but keeps its
    /// original position.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Iterates over `(name, raw value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// An ordered collection of element styles.
///
/// # Example
///
/// ```rust
/// use themepaint::{ElementStyle, Theme};
///
/// let theme = Theme::new()
///     .add(ElementStyle::new("header").add("bgColor", "222").add("textColor", "fff"))
///     .add(ElementStyle::new("footer").add("marginTop", "40"));
///
/// assert_eq!(theme.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    elements: Vec<ElementStyle>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element, returning the updated theme for chaining.
    pub fn add(mut self, element: ElementStyle) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: ElementStyle) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[ElementStyle] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementStyle> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<Vec<ElementStyle>> for Theme {
    fn from(elements: Vec<ElementStyle>) -> Self {
        Self { elements }
    }
}

impl FromIterator<ElementStyle> for Theme {
    fn from_iter<I: IntoIterator<Item = ElementStyle>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Theme {
    type Item = &'a ElementStyle;
    type IntoIter = std::slice::Iter<'a, ElementStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_add_preserves_order() {
        let element = ElementStyle::new("hero")
            .add("marginTop", "10")
            .add("bgColor", "fff")
            .add("marginTop", "20");

        let names: Vec<_> = element.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["marginTop", "bgColor"]);
        assert_eq!(element.get("marginTop"), Some("20"));
    }

    #[test]
    fn test_theme_default_is_empty() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }

    #[test]
    fn test_theme_from_iter() {
        let theme: Theme = ["a", "b"].into_iter().map(ElementStyle::new).collect();
        let ids: Vec<_> = theme.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_theme_deserializes_in_order() {
        let json = r##"[
            {"id": "nav", "properties": {"textSize": "14", "bgColor": "#333", "textAlign": "left"}},
            {"id": "body"}
        ]"##;
        let theme: Theme = serde_json::from_str(json).unwrap();

        assert_eq!(theme.len(), 2);
        let names: Vec<_> = theme.elements()[0].iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["textSize", "bgColor", "textAlign"]);
        assert_eq!(theme.elements()[0].get("bgColor"), Some("#333"));
        assert!(theme.elements()[1].properties.is_empty());
    }

    #[test]
    fn test_theme_serializes_as_list() {
        let theme = Theme::new().add(ElementStyle::new("x").add("bgColor", "fff"));
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"id": "x", "properties": {"bgColor": "fff"}}])
        );
    }
}
