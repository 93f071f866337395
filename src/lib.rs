//! Canvas DSL - a line-oriented language for business model canvases
//!
//! This library parses Business Model Canvas (BMC) and Lean Model Canvas
//! (LMC) descriptions, infers which canvas type the text describes,
//! re-serializes documents canonically, validates content, and computes a
//! fixed nine-region layout plan for a drawing backend.
//!
//! # Example
//!
//! ```rust
//! use canvas_dsl::{parse, format, CanvasType};
//!
//! let doc = parse("bmc\ntitle: Acme\n\nchannels:\n  - web\n");
//! assert_eq!(doc.canvas_type, CanvasType::Bmc);
//! assert_eq!(format(&doc), "bmc\ntitle: Acme\n\nchannels:\n  - web\n");
//! ```
//!
//! Every stage is a pure function over immutable inputs: each call allocates
//! and returns a fresh value, so the engine is freely usable from concurrent
//! callers with no coordination.

pub mod format;
pub mod layout;
pub mod locale;
pub mod parser;
pub mod validate;

pub use format::format;
pub use layout::{
    plan, CharMetrics, HeaderBlock, ItemRun, LayoutConfig, LayoutPlan, PlanMetrics, Rect,
    SectionBlock, TextMeasure,
};
pub use locale::{Locale, LocaleError};
pub use parser::{parse, CanvasDocument, CanvasType, SectionKey, Sections};
pub use validate::{validate, Validation};

/// Parse DSL source and compute its layout plan with default configuration
/// and approximate text metrics.
///
/// This is the whole pipeline in one call, for callers without their own
/// font engine.
///
/// # Example
///
/// ```rust
/// use canvas_dsl::plan_source;
///
/// let plan = plan_source("bmc\nchannels:\n  - web\n", 1200.0, 800.0);
/// assert_eq!(plan.blocks.len(), 9);
/// ```
pub fn plan_source(source: &str, width: f64, height: f64) -> LayoutPlan {
    let doc = parse(source);
    plan(
        &doc,
        width,
        height,
        &CharMetrics::default(),
        &LayoutConfig::default(),
    )
}
