//! Localized strings for canvas rendering
//!
//! Section titles and the empty-section placeholder are a rendering concern,
//! not part of the document model, so they live in a [`Locale`] that callers
//! pass into the layout engine explicitly. Locales load from TOML files and
//! fall back to the embedded English table for any missing entry, which
//! makes swapping or reloading a locale a plain value replacement rather
//! than global state.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::parser::SectionKey;

/// Errors that can occur when loading locale tables
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse locale TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A table of localized strings for one language
#[derive(Debug, Clone)]
pub struct Locale {
    /// Optional display name, e.g. "English"
    pub name: Option<String>,
    /// Section key spelling -> localized section title
    sections: HashMap<String, String>,
    /// Miscellaneous UI strings (currently just the placeholder)
    strings: HashMap<String, String>,
}

/// TOML structure for deserializing locale files
#[derive(Deserialize)]
struct TomlLocale {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    sections: HashMap<String, String>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Embedded English table, used as the default locale and as the fallback
/// for entries missing from a loaded locale
const DEFAULT_LOCALE: &str = r#"
[metadata]
name = "English"

[sections]
customer-segments = "Customer Segments"
value-propositions = "Value Propositions"
channels = "Channels"
customer-relationships = "Customer Relationships"
revenue-streams = "Revenue Streams"
key-resources = "Key Resources"
key-activities = "Key Activities"
key-partnerships = "Key Partnerships"
cost-structure = "Cost Structure"
problem = "Problem"
solution = "Solution"
unique-value-proposition = "Unique Value Proposition"
unfair-advantage = "Unfair Advantage"
key-metrics = "Key Metrics"

[strings]
placeholder = "write here"
untitled = "Untitled Canvas"
"#;

/// Embedded English table, parsed once and borrowed by the fallback chain
fn default_locale() -> &'static Locale {
    static DEFAULT: OnceLock<Locale> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        Locale::from_toml(DEFAULT_LOCALE).expect("Embedded locale should be valid TOML")
    })
}

impl Locale {
    /// Load a locale from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LocaleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a locale from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, LocaleError> {
        let parsed: TomlLocale = toml::from_str(content)?;
        Ok(Locale {
            name: parsed.metadata.and_then(|m| m.name),
            sections: parsed.sections,
            strings: parsed.strings,
        })
    }

    /// Localized title of a section.
    ///
    /// Falls back to the embedded English table, then to the key's own
    /// kebab-case spelling.
    pub fn section_title(&self, key: SectionKey) -> String {
        if let Some(title) = self.sections.get(key.as_str()) {
            return title.clone();
        }
        default_locale()
            .sections
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.as_str().to_string())
    }

    /// Placeholder line shown in sections without items
    pub fn placeholder(&self) -> String {
        self.string("placeholder")
    }

    /// Header title for documents without one
    pub fn untitled(&self) -> String {
        self.string("untitled")
    }

    fn string(&self, key: &str) -> String {
        if let Some(value) = self.strings.get(key) {
            return value.clone();
        }
        default_locale()
            .strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Locale {
    fn default() -> Self {
        default_locale().clone()
    }
}
