//! Layout engine for the fixed nine-region canvas grid
//!
//! Takes a parsed [`CanvasDocument`](crate::parser::CanvasDocument) plus
//! viewport dimensions and produces a [`LayoutPlan`]: region rectangles on
//! the 5x3 grid and word-wrapped text lines, ready for a drawing backend.

pub mod config;
pub mod engine;
pub mod regions;
pub mod types;

pub use config::{LayoutConfig, Metric};
pub use engine::{plan, wrap};
pub use regions::{region_for, regions, Region, GRID_COLS, GRID_ROWS};
pub use types::{
    CharMetrics, HeaderBlock, ItemRun, LayoutPlan, PlanMetrics, Rect, SectionBlock, TextMeasure,
};
