//! Fixed region tables for the 5x3 canvas grid
//!
//! Both canvas types share the same region shapes; only the section keys
//! occupying the LMC-specific slots differ. Spans are in grid-cell units and
//! may be fractional: the two bottom regions are 2.5 cells wide each.

use crate::parser::{CanvasType, SectionKey};

/// Grid columns (fixed for both canvas types)
pub const GRID_COLS: f64 = 5.0;
/// Grid rows (fixed for both canvas types)
pub const GRID_ROWS: f64 = 3.0;

/// One region of the grid, in grid-cell units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub key: SectionKey,
    pub grid_x: f64,
    pub grid_y: f64,
    pub grid_w: f64,
    pub grid_h: f64,
}

const fn region(key: SectionKey, grid_x: f64, grid_y: f64, grid_w: f64, grid_h: f64) -> Region {
    Region {
        key,
        grid_x,
        grid_y,
        grid_w,
        grid_h,
    }
}

const BMC_REGIONS: [Region; 9] = [
    region(SectionKey::KeyPartnerships, 0.0, 0.0, 1.0, 2.0),
    region(SectionKey::KeyActivities, 1.0, 0.0, 1.0, 1.0),
    region(SectionKey::ValuePropositions, 2.0, 0.0, 1.0, 2.0),
    region(SectionKey::CustomerRelationships, 3.0, 0.0, 1.0, 1.0),
    region(SectionKey::CustomerSegments, 4.0, 0.0, 1.0, 2.0),
    region(SectionKey::KeyResources, 1.0, 1.0, 1.0, 1.0),
    region(SectionKey::Channels, 3.0, 1.0, 1.0, 1.0),
    region(SectionKey::CostStructure, 0.0, 2.0, 2.5, 1.0),
    region(SectionKey::RevenueStreams, 2.5, 2.0, 2.5, 1.0),
];

const LMC_REGIONS: [Region; 9] = [
    region(SectionKey::Problem, 0.0, 0.0, 1.0, 2.0),
    region(SectionKey::Solution, 1.0, 0.0, 1.0, 1.0),
    region(SectionKey::UniqueValueProposition, 2.0, 0.0, 1.0, 2.0),
    region(SectionKey::UnfairAdvantage, 3.0, 0.0, 1.0, 1.0),
    region(SectionKey::CustomerSegments, 4.0, 0.0, 1.0, 2.0),
    region(SectionKey::KeyMetrics, 1.0, 1.0, 1.0, 1.0),
    region(SectionKey::Channels, 3.0, 1.0, 1.0, 1.0),
    region(SectionKey::CostStructure, 0.0, 2.0, 2.5, 1.0),
    region(SectionKey::RevenueStreams, 2.5, 2.0, 2.5, 1.0),
];

/// The region table for a canvas type
pub fn regions(canvas_type: CanvasType) -> &'static [Region; 9] {
    match canvas_type {
        CanvasType::Bmc => &BMC_REGIONS,
        CanvasType::Lmc => &LMC_REGIONS,
    }
}

/// The region a section occupies on the given canvas type.
///
/// Total for every key in the canvas type's canonical list; the sealed
/// enums make an unknown canvas type unrepresentable.
pub fn region_for(canvas_type: CanvasType, key: SectionKey) -> Region {
    regions(canvas_type)
        .iter()
        .copied()
        .find(|r| r.key == key)
        .unwrap_or_else(|| panic!("section {key} has no region on {canvas_type}"))
}
