//! Output types for the layout engine

use serde::Serialize;

use crate::parser::SectionKey;

/// An axis-aligned rectangle in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Text measurement capability injected by the rendering backend.
///
/// Font metrics belong to whatever paints the plan, so the engine only asks
/// for the advance width of a string at a font size.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f64) -> f64;
}

/// Approximate measurer: a fixed average glyph advance as a fraction of the
/// font size. Good enough for tests and the CLI; real backends should
/// measure with their font engine.
#[derive(Debug, Clone, Copy)]
pub struct CharMetrics {
    /// Average advance per glyph, as a fraction of the font size
    pub advance: f64,
}

impl Default for CharMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for CharMetrics {
    fn width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.advance
    }
}

/// Wrapped lines of one section item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemRun {
    pub bullet_lines: Vec<String>,
}

/// One of the nine fixed regions of the grid, ready to paint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub section_key: SectionKey,
    pub rect: Rect,
    /// Wrapped localized section title
    pub title_lines: Vec<String>,
    /// Wrapped items in source order; shorter than the section's item list
    /// when truncated
    pub item_runs: Vec<ItemRun>,
    /// Localized placeholder line, present only when the section has no items
    pub placeholder: Option<String>,
    /// True when overflow cut items or lines
    pub truncated: bool,
}

/// The header band above the grid, carrying the wrapped document title and
/// description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    pub rect: Rect,
    pub title_lines: Vec<String>,
    pub description_lines: Vec<String>,
}

/// Resolved pixel metrics for one plan, so backends paint text at the sizes
/// the wrap calculations assumed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanMetrics {
    pub margin: f64,
    pub padding: f64,
    pub font_size: f64,
    pub header_font_size: f64,
    pub title_font_size: f64,
    pub section_title_size: f64,
    pub line_height: f64,
    pub icon_size: f64,
    pub header_height: f64,
}

/// The complete geometric plan for one canvas render.
///
/// Recomputed per render; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// `min(width / 1200, height / 800)`
    pub scale: f64,
    pub metrics: PlanMetrics,
    pub header: HeaderBlock,
    /// One block per canonical section of the active canvas type, in
    /// canonical order
    pub blocks: Vec<SectionBlock>,
}

impl LayoutPlan {
    /// Find the block for a section key, if the active canvas type has it
    pub fn block(&self, key: SectionKey) -> Option<&SectionBlock> {
        self.blocks.iter().find(|b| b.section_key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_char_metrics_width() {
        let measure = CharMetrics::default();
        assert_eq!(measure.width("abcd", 10.0), 24.0);
        assert_eq!(measure.width("", 10.0), 0.0);
    }

    #[test]
    fn test_char_metrics_counts_chars_not_bytes() {
        let measure = CharMetrics::default();
        assert_eq!(measure.width("héllo", 10.0), measure.width("hello", 10.0));
    }
}
