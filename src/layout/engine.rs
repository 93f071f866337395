//! Layout computation
//!
//! Maps a parsed document plus viewport dimensions onto the fixed 5x3 grid,
//! word-wrapping section titles and items into paintable lines. Pure and
//! total: a structurally valid document always yields a plan, and overflow
//! is handled by silent truncation rather than errors.

use crate::parser::{CanvasDocument, SectionKey};

use super::config::LayoutConfig;
use super::regions::{region_for, GRID_COLS, GRID_ROWS};
use super::types::{
    HeaderBlock, ItemRun, LayoutPlan, PlanMetrics, Rect, SectionBlock, TextMeasure,
};

/// Reference viewport the metric table is calibrated against
const REFERENCE_WIDTH: f64 = 1200.0;
const REFERENCE_HEIGHT: f64 = 800.0;

/// Horizontal reserve inside a region for the bullet glyph and indent
const BULLET_RESERVE: f64 = 20.0;

/// Compute the layout plan for a document at the given viewport size.
pub fn plan(
    doc: &CanvasDocument,
    width: f64,
    height: f64,
    measure: &impl TextMeasure,
    config: &LayoutConfig,
) -> LayoutPlan {
    let scale = (width / REFERENCE_WIDTH).min(height / REFERENCE_HEIGHT);
    let metrics = resolve_metrics(config, scale);

    let grid_w = width - 2.0 * metrics.margin;
    let grid_h = height - metrics.header_height - 2.0 * metrics.margin;
    let cell_w = grid_w / GRID_COLS;
    let cell_h = grid_h / GRID_ROWS;

    let header = layout_header(doc, width, measure, &metrics, config);

    let blocks = doc
        .canvas_type
        .canonical_sections()
        .iter()
        .map(|&key| {
            let region = region_for(doc.canvas_type, key);
            let rect = Rect::new(
                metrics.margin + region.grid_x * cell_w,
                metrics.header_height + metrics.margin + region.grid_y * cell_h,
                region.grid_w * cell_w,
                region.grid_h * cell_h,
            );
            layout_section(doc, key, rect, measure, &metrics, config)
        })
        .collect();

    LayoutPlan {
        canvas_width: width,
        canvas_height: height,
        scale,
        metrics,
        header,
        blocks,
    }
}

fn resolve_metrics(config: &LayoutConfig, scale: f64) -> PlanMetrics {
    PlanMetrics {
        margin: config.margin.at(scale),
        padding: config.padding.at(scale),
        font_size: config.font_size.at(scale),
        header_font_size: config.header_font_size.at(scale),
        title_font_size: config.title_font_size.at(scale),
        section_title_size: config.section_title_size.at(scale),
        line_height: config.line_height.at(scale),
        icon_size: config.icon_size.at(scale),
        header_height: config.header_height,
    }
}

fn layout_header(
    doc: &CanvasDocument,
    width: f64,
    measure: &impl TextMeasure,
    metrics: &PlanMetrics,
    config: &LayoutConfig,
) -> HeaderBlock {
    let rect = Rect::new(metrics.margin, 0.0, width - 2.0 * metrics.margin, metrics.header_height);
    let title = if doc.title.is_empty() {
        config.locale.untitled()
    } else {
        doc.title.clone()
    };
    HeaderBlock {
        rect,
        title_lines: wrap(&title, metrics.header_font_size, rect.w, measure),
        description_lines: wrap(&doc.description, metrics.title_font_size, rect.w, measure),
    }
}

fn layout_section(
    doc: &CanvasDocument,
    key: SectionKey,
    rect: Rect,
    measure: &impl TextMeasure,
    metrics: &PlanMetrics,
    config: &LayoutConfig,
) -> SectionBlock {
    let title = config.locale.section_title(key);
    let title_lines = wrap(
        &title,
        metrics.section_title_size,
        rect.w - 2.0 * metrics.padding,
        measure,
    );

    let items = doc.sections.get(key);
    if items.is_empty() {
        return SectionBlock {
            section_key: key,
            rect,
            title_lines,
            item_runs: vec![],
            placeholder: Some(config.locale.placeholder()),
            truncated: false,
        };
    }

    // Items start below the title and stop at the bottom padding line
    let limit = rect.bottom() - metrics.padding;
    let mut cursor = rect.y + metrics.padding + title_lines.len() as f64 * metrics.line_height;
    let item_width = rect.w - 2.0 * metrics.padding - BULLET_RESERVE;

    let mut item_runs = Vec::new();
    let mut truncated = false;

    for item in items {
        let mut run = ItemRun::default();
        for line in wrap(item, metrics.font_size, item_width, measure) {
            if cursor + metrics.line_height > limit {
                truncated = true;
                break;
            }
            run.bullet_lines.push(line);
            cursor += metrics.line_height;
        }
        if !run.bullet_lines.is_empty() {
            item_runs.push(run);
        }
        if truncated {
            break;
        }
    }

    SectionBlock {
        section_key: key,
        rect,
        title_lines,
        item_runs,
        placeholder: None,
        truncated,
    }
}

/// Greedy word wrap: words accumulate onto a line while the measured width
/// stays within `max_width`; a word that does not fit starts a new line. A
/// single word wider than the limit still gets a line of its own.
pub fn wrap(
    text: &str,
    font_size: f64,
    max_width: f64,
    measure: &impl TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure.width(&candidate, font_size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
