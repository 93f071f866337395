//! Integration tests for the canvas DSL parser, classifier, and validator

use canvas_dsl::{parse, validate, CanvasType, SectionKey};

#[test]
fn test_full_bmc_document() {
    let input = r#"
# Acme's business model
bmc
title: Acme Widgets
description: Industrial widgets for small manufacturers

customer-segments:
  - small manufacturers
  - hardware startups

value-propositions:
  - widgets that survive harsh environments

channels:
  - direct sales

revenue-streams:
  - per-unit sales
  - maintenance contracts
"#;

    let doc = parse(input);
    assert_eq!(doc.canvas_type, CanvasType::Bmc);
    assert_eq!(doc.title, "Acme Widgets");
    assert_eq!(doc.description, "Industrial widgets for small manufacturers");
    assert_eq!(
        doc.sections.get(SectionKey::CustomerSegments),
        ["small manufacturers", "hardware startups"]
    );
    assert_eq!(
        doc.sections.get(SectionKey::RevenueStreams),
        ["per-unit sales", "maintenance contracts"]
    );
}

#[test]
fn test_full_lmc_document() {
    let input = r#"
lmc
title: Fleetly

problem:
  - fleet managers lack real-time vehicle status
  - maintenance is reactive

solution:
  - plug-in telemetry with predictive alerts

key-metrics:
  - active vehicles
"#;

    let doc = parse(input);
    assert_eq!(doc.canvas_type, CanvasType::Lmc);
    assert_eq!(doc.sections.get(SectionKey::Problem).len(), 2);
    assert!(doc.sections.is_used(SectionKey::KeyMetrics));
}

#[test]
fn test_parser_permissiveness() {
    let doc = parse("garbage\nbmc\ncustomer-segments:\n  - A\n");
    assert_eq!(doc.sections.get(SectionKey::CustomerSegments), ["A"]);
}

#[test]
fn test_content_before_keyword_is_dead() {
    let input = "channels:\n  - early\nbmc\nchannels:\n  - late\n";
    let doc = parse(input);
    assert_eq!(doc.sections.get(SectionKey::Channels), ["late"]);
}

#[test]
fn test_classifier_lmc_exclusive_wins() {
    // LMC-only section decides LMC even alongside a BMC-only section
    let doc = parse("bmc\nproblem:\n  - x\nvalue-propositions:\n  - y\n");
    assert_eq!(doc.canvas_type, CanvasType::Lmc);
}

#[test]
fn test_classifier_shared_only_defaults_to_bmc() {
    let doc = parse("lmc\nchannels:\n  - x\n");
    assert_eq!(doc.canvas_type, CanvasType::Bmc);
}

#[test]
fn test_validator_accepts_content() {
    let result = validate("bmc\ncustomer-segments:\n  - startups\n");
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_validator_rejects_empty_canvas() {
    let result = validate("bmc\ntitle: T\n");
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.document.is_some());
}

#[test]
fn test_later_section_header_reopens_section() {
    let input = "bmc\nchannels:\n  - web\ncost-structure:\n  - hosting\nchannels:\n  - retail\n";
    let doc = parse(input);
    assert_eq!(doc.sections.get(SectionKey::Channels), ["web", "retail"]);
    assert_eq!(doc.sections.get(SectionKey::CostStructure), ["hosting"]);
}

#[test]
fn test_all_fourteen_sections_always_present() {
    let doc = parse("bmc\n");
    for key in canvas_dsl::parser::ALL_SECTIONS {
        assert!(doc.sections.get(key).is_empty());
    }
}
