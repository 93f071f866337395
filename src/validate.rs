//! Content validation for canvas DSL text
//!
//! The validator is a thin pass over the parser. The grammar itself never
//! fails, so the only rule enforced is that the canvas says something: at
//! least one section must carry content.

use serde::Serialize;

use crate::parser::{parse, CanvasDocument};

/// Outcome of validating DSL text
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    /// Whether the text describes a usable canvas
    pub valid: bool,
    /// Human-readable error messages; empty when valid
    pub errors: Vec<String>,
    /// The parsed document, returned even on failure so callers can inspect
    /// partial content. The parser is total, so this is always `Some`; the
    /// field stays optional for callers that treat "no document" uniformly.
    pub document: Option<CanvasDocument>,
}

/// Parse and validate DSL text. Never panics.
pub fn validate(text: &str) -> Validation {
    let document = parse(text);
    let mut errors = Vec::new();

    if document.sections.used().next().is_none() {
        errors.push(
            "canvas has no content: add at least one section with `- item` lines".to_string(),
        );
    }

    Validation {
        valid: errors.is_empty(),
        errors,
        document: Some(document),
    }
}
