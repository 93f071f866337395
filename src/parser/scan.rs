//! Permissive line scanner for the canvas DSL
//!
//! The grammar is line-oriented and deliberately forgiving: unrecognized
//! lines are skipped, never reported. Content lines only count once a bare
//! `bmc` or `lmc` line has opened the canvas block.

use super::classify::classify;
use super::document::{CanvasDocument, CanvasType, SectionKey};

/// Parse DSL source into a [`CanvasDocument`]. Total: malformed input
/// produces an emptier document, never an error.
pub fn parse(text: &str) -> CanvasDocument {
    let mut doc = CanvasDocument::empty();
    let mut inside_canvas_block = false;
    let mut current_section: Option<SectionKey> = None;

    for raw in text.lines() {
        let line = raw.trim();

        // Blank and comment lines are skipped in any state
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !inside_canvas_block {
            if CanvasType::from_keyword(line).is_some() {
                inside_canvas_block = true;
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("title:") {
            doc.title = rest.trim().to_string();
            continue;
        }

        if let Some(rest) = line.strip_prefix("description:") {
            doc.description = rest.trim().to_string();
            continue;
        }

        if let Some(stem) = line.strip_suffix(':') {
            if let Some(key) = SectionKey::from_name(stem.trim()) {
                current_section = Some(key);
                continue;
            }
        }

        if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            if let Some(key) = current_section {
                let item = rest.trim();
                if !item.is_empty() {
                    doc.sections.push(key, item);
                }
            }
            continue;
        }

        // Anything else is ignored
    }

    doc.canvas_type = classify(&doc.sections);
    doc
}
