//! Canvas type inference
//!
//! Classification is a total function: it always yields a type and defaults
//! to BMC. A type-exclusive section always decides the outcome before any
//! score comparison, and LMC-exclusive sections take priority over
//! BMC-exclusive ones.

use super::document::{CanvasType, Sections};

/// Infer the canvas type from which sections carry content.
///
/// Priority order:
/// 1. any used LMC-only key -> LMC
/// 2. any used BMC-only key -> BMC
/// 3. compare used-key counts against each canonical list (shared keys
///    count for both); LMC only on a strictly greater score, tie -> BMC
pub fn classify(sections: &Sections) -> CanvasType {
    let mut has_lmc_only = false;
    let mut has_bmc_only = false;
    let mut bmc_score = 0usize;
    let mut lmc_score = 0usize;

    for key in sections.used() {
        has_lmc_only |= key.is_lmc_only();
        has_bmc_only |= key.is_bmc_only();
        if CanvasType::Bmc.canonical_sections().contains(&key) {
            bmc_score += 1;
        }
        if CanvasType::Lmc.canonical_sections().contains(&key) {
            lmc_score += 1;
        }
    }

    if has_lmc_only {
        CanvasType::Lmc
    } else if has_bmc_only {
        CanvasType::Bmc
    } else if lmc_score > bmc_score {
        CanvasType::Lmc
    } else {
        CanvasType::Bmc
    }
}
