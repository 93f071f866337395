//! Configuration for the layout engine

use crate::locale::Locale;

/// A metric that scales with the viewport but never shrinks below a floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    /// Value at reference size (1200x800)
    pub base: f64,
    /// Minimum value at small viewports
    pub floor: f64,
}

impl Metric {
    pub const fn new(base: f64, floor: f64) -> Self {
        Self { base, floor }
    }

    /// Resolve the metric at a given scale: `max(floor, base * scale)`
    pub fn at(&self, scale: f64) -> f64 {
        (self.base * scale).max(self.floor)
    }
}

/// Configuration options for layout computation.
///
/// Holds the fixed metric table and the locale used for section titles and
/// the empty-section placeholder. Swapping the locale (or reloading it from
/// file) is a plain field replacement; nothing is cached globally.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Outer margin around the grid
    pub margin: Metric,
    /// Inner padding of each region
    pub padding: Metric,
    /// Item text size
    pub font_size: Metric,
    /// Document title size in the header band
    pub header_font_size: Metric,
    /// Document description size in the header band
    pub title_font_size: Metric,
    /// Section title size
    pub section_title_size: Metric,
    /// Vertical advance per wrapped line
    pub line_height: Metric,
    /// Section icon size, for backends that draw one next to the title
    pub icon_size: Metric,
    /// Height of the header band; does not scale
    pub header_height: f64,
    /// Localized strings for titles and placeholders
    pub locale: Locale,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: Metric::new(30.0, 20.0),
            padding: Metric::new(20.0, 15.0),
            font_size: Metric::new(12.0, 10.0),
            header_font_size: Metric::new(18.0, 14.0),
            title_font_size: Metric::new(14.0, 11.0),
            section_title_size: Metric::new(15.0, 12.0),
            line_height: Metric::new(18.0, 16.0),
            icon_size: Metric::new(16.0, 12.0),
            header_height: 80.0,
            locale: Locale::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default metrics and the English locale
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale used for section titles and placeholders
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
