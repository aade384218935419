//! Paint configuration.
//!
//! [`PaintConfig`] holds the document vocabulary both renderers address
//! elements with (the id attribute, overlay selector and content slots),
//! the optional pattern image base, and export options. Every field has a
//! default, so partial YAML or JSON documents are accepted.
//!
//! ```rust
//! use themepaint::PaintConfig;
//!
//! let config = PaintConfig::from_yaml_str("patterns: /img/patterns/\n").unwrap();
//! assert_eq!(config.id_attribute, "swyg");
//! assert_eq!(config.patterns.as_deref(), Some("/img/patterns/"));
//! ```

mod error;

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

static DEFAULT_CONFIG: Lazy<PaintConfig> = Lazy::new(PaintConfig::default);

/// Document vocabulary and rendering options shared by the live painter
/// and the CSS exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Attribute whose value identifies a themed element.
    pub id_attribute: String,
    /// Selector of the overlay sub-target, relative to the element.
    pub overlay_selector: String,
    /// Selector of the image content slot, relative to the element.
    pub image_slot: String,
    /// Selector of the text content slot, relative to the element.
    pub text_slot: String,
    /// Base URL for background patterns.
    ///
    /// When set, a pattern value `dots` becomes `url(<base>dots.png)`;
    /// otherwise the value is used as the URL as-is.
    pub patterns: Option<String>,
    /// Options for stylesheet export.
    pub export: ExportOptions,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            id_attribute: "swyg".to_string(),
            overlay_selector: "[swyg-overlay]".to_string(),
            image_slot: "swyg-template-image".to_string(),
            text_slot: "swyg-template-text".to_string(),
            patterns: None,
            export: ExportOptions::default(),
        }
    }
}

impl PaintConfig {
    /// Returns the process-wide default configuration.
    pub fn shared_default() -> &'static PaintConfig {
        &DEFAULT_CONFIG
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for anything other than
    /// `.yaml`, `.yml` or `.json`, and [`ConfigError::Io`] if the file
    /// cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

/// Stylesheet export options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Omit selector blocks that have no declarations.
    ///
    /// Off by default: every element emits both its own block and its
    /// overlay block, even when either is empty.
    pub skip_empty_blocks: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary() {
        let config = PaintConfig::default();
        assert_eq!(config.id_attribute, "swyg");
        assert_eq!(config.overlay_selector, "[swyg-overlay]");
        assert_eq!(config.image_slot, "swyg-template-image");
        assert_eq!(config.text_slot, "swyg-template-text");
        assert!(config.patterns.is_none());
        assert!(!config.export.skip_empty_blocks);
    }

    #[test]
    fn test_shared_default_matches_default() {
        assert_eq!(PaintConfig::shared_default(), &PaintConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PaintConfig::from_yaml_str(
            "id_attribute: data-theme\nexport:\n  skip_empty_blocks: true\n",
        )
        .unwrap();
        assert_eq!(config.id_attribute, "data-theme");
        assert_eq!(config.overlay_selector, "[swyg-overlay]");
        assert!(config.export.skip_empty_blocks);
    }

    #[test]
    fn test_json_config() {
        let config = PaintConfig::from_json_str(r#"{"patterns": "/p/"}"#).unwrap();
        assert_eq!(config.patterns.as_deref(), Some("/p/"));
        assert_eq!(config.text_slot, "swyg-template-text");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = PaintConfig::from_yaml_str("export: [1, 2");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "overlay_selector: .overlay").unwrap();

        let config = PaintConfig::load(file.path()).unwrap();
        assert_eq!(config.overlay_selector, ".overlay");
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"image_slot": "figure"}}"#).unwrap();

        let config = PaintConfig::load(file.path()).unwrap();
        assert_eq!(config.image_slot, "figure");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let result = PaintConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PaintConfig::load(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
