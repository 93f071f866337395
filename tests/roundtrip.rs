//! Round-trip tests: parse -> format -> parse must preserve document
//! meaning, restricted to the active canvas type's canonical sections.

use canvas_dsl::{format, parse, CanvasType, SectionKey};
use pretty_assertions::assert_eq;

#[test]
fn test_bmc_round_trip_is_identity() {
    let input = r#"bmc
title: Acme Widgets
description: Industrial widgets

customer-segments:
  - small manufacturers
  - hardware startups

value-propositions:
  - durable widgets

cost-structure:
  - tooling
"#;
    let doc = parse(input);
    let reparsed = parse(&format(&doc));
    assert_eq!(doc, reparsed);
}

#[test]
fn test_lmc_round_trip_is_identity() {
    let input = r#"lmc
title: Fleetly

problem:
  - reactive maintenance

solution:
  - predictive alerts

key-metrics:
  - active vehicles

revenue-streams:
  - per-vehicle subscription
"#;
    let doc = parse(input);
    let reparsed = parse(&format(&doc));
    assert_eq!(doc, reparsed);
}

#[test]
fn test_format_is_canonical_fixed_point() {
    // A messy but valid input formats to the canonical form, which then
    // formats to itself
    let input = "# noise\nbmc\n   title:   Acme  \nchannels:\n  *   web  \n\n  - retail\n";
    let once = format(&parse(input));
    let twice = format(&parse(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_round_trip_drops_non_canonical_sections() {
    // A document classified LMC loses BMC-exclusive content on format; that
    // is the contract, not a bug
    let doc = parse("bmc\nproblem:\n  - churn\nvalue-propositions:\n  - speed\n");
    assert_eq!(doc.canvas_type, CanvasType::Lmc);

    let reparsed = parse(&format(&doc));
    assert_eq!(reparsed.canvas_type, CanvasType::Lmc);
    assert_eq!(reparsed.sections.get(SectionKey::Problem), ["churn"]);
    assert!(reparsed.sections.get(SectionKey::ValuePropositions).is_empty());

    // Everything on the canonical list survives
    for &key in CanvasType::Lmc.canonical_sections() {
        assert_eq!(doc.sections.get(key), reparsed.sections.get(key));
    }
}

#[test]
fn test_round_trip_preserves_item_order() {
    let input = "bmc\nchannels:\n  - c\n  - a\n  - b\n";
    let reparsed = parse(&format(&parse(input)));
    assert_eq!(reparsed.sections.get(SectionKey::Channels), ["c", "a", "b"]);
}

#[test]
fn test_canonical_form_snapshot() {
    let input = "bmc\ntitle: Acme\nchannels:\n  - web\ncustomer-segments:\n  - startups\n";
    insta::assert_snapshot!("canonical_bmc", format(&parse(input)));
}

#[test]
fn test_canonical_lmc_snapshot() {
    let input = r#"lmc
title: Fleetly
description: Telemetry for small fleets

problem:
  - reactive maintenance
  - no real-time status

key-metrics:
  - active vehicles
"#;
    insta::assert_snapshot!("canonical_lmc", format(&parse(input)));
}
