//! Canonical serialization of a canvas document
//!
//! The formatter is the inverse of the parser for well-formed documents and
//! defines the canonical form consumed by round-trip tests and by callers
//! that edit documents as parse -> modify -> format.

use crate::parser::CanvasDocument;

/// Serialize a document to canonical DSL text.
///
/// Only sections in the canonical list of the document's canvas type are
/// emitted; content under the other type's exclusive keys is dropped. The
/// output carries no trailing whitespace and exactly one trailing newline.
pub fn format(doc: &CanvasDocument) -> String {
    let mut out = String::new();

    out.push_str(doc.canvas_type.keyword());
    out.push('\n');

    if !doc.title.is_empty() {
        out.push_str("title: ");
        out.push_str(&doc.title);
        out.push('\n');
    }
    if !doc.description.is_empty() {
        out.push_str("description: ");
        out.push_str(&doc.description);
        out.push('\n');
    }
    out.push('\n');

    for &key in doc.canvas_type.canonical_sections() {
        let items = doc.sections.get(key);
        if items.is_empty() {
            continue;
        }
        out.push_str(key.as_str());
        out.push_str(":\n");
        for item in items {
            out.push_str("  - ");
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
    }

    let mut canonical = out.trim_end().to_string();
    canonical.push('\n');
    canonical
}
