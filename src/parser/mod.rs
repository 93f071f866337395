//! Parser for the canvas DSL
//!
//! Turns raw DSL text into a [`CanvasDocument`] and infers the canvas type
//! from section content.

pub mod classify;
pub mod document;
mod scan;

pub use classify::classify;
pub use document::{
    CanvasDocument, CanvasType, SectionKey, Sections, ALL_SECTIONS, BMC_CANONICAL, LMC_CANONICAL,
    SECTION_COUNT,
};
pub use scan::parse;
