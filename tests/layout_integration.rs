//! Integration tests for the layout engine

use canvas_dsl::{
    parse, plan, plan_source, CharMetrics, LayoutConfig, Locale, SectionKey, TextMeasure,
};

#[test]
fn test_grid_areas_sum_to_fifteen_cells() {
    for source in ["bmc\nchannels:\n  - web\n", "lmc\nproblem:\n  - churn\n"] {
        let result = plan_source(source, 1200.0, 800.0);
        let cell_w = (1200.0 - 60.0) / 5.0;
        let cell_h = (800.0 - 80.0 - 60.0) / 3.0;
        let area: f64 = result.blocks.iter().map(|b| b.rect.w * b.rect.h).sum();
        let total_cells = area / (cell_w * cell_h);
        assert!(
            (total_cells - 15.0).abs() < 1e-9,
            "expected 15 grid cells, got {total_cells}"
        );
    }
}

#[test]
fn test_blocks_stay_inside_the_grid() {
    let result = plan_source("bmc\nchannels:\n  - web\n", 1200.0, 800.0);
    for block in &result.blocks {
        assert!(block.rect.x >= result.metrics.margin);
        assert!(block.rect.right() <= 1200.0 - result.metrics.margin + 1e-9);
        assert!(block.rect.y >= result.metrics.header_height + result.metrics.margin);
        assert!(block.rect.bottom() <= 800.0 - result.metrics.margin + 1e-9);
    }
}

#[test]
fn test_overflow_truncation() {
    let long_items: String = (0..8)
        .map(|i| format!("  - item number {i} with a deliberately verbose description\n"))
        .collect();
    let source = format!("bmc\nkey-activities:\n{long_items}");
    let result = plan_source(&source, 600.0, 400.0);

    let block = result.block(SectionKey::KeyActivities).unwrap();
    assert!(block.truncated);
    assert!(block.item_runs.len() < 8);

    // Every emitted line stays above the bottom padding line
    let lines: usize = block
        .item_runs
        .iter()
        .map(|run| run.bullet_lines.len())
        .sum();
    let title_lines = block.title_lines.len();
    let used = block.rect.y
        + result.metrics.padding
        + (title_lines + lines) as f64 * result.metrics.line_height;
    assert!(used <= block.rect.bottom() - result.metrics.padding + 1e-9);
}

#[test]
fn test_wide_region_swallows_more_text() {
    // The same items fit in fewer lines in the 2.5-cell-wide bottom regions
    // than in a 1-cell column
    let item = "  - a moderately long item that needs wrapping\n";
    let source = format!("bmc\nkey-activities:\n{item}cost-structure:\n{item}");
    let result = plan_source(&source, 1200.0, 800.0);

    let narrow = &result.block(SectionKey::KeyActivities).unwrap().item_runs[0];
    let wide = &result.block(SectionKey::CostStructure).unwrap().item_runs[0];
    assert!(wide.bullet_lines.len() <= narrow.bullet_lines.len());
}

#[test]
fn test_localized_titles_and_placeholder() {
    let locale = Locale::from_file("locales/ko.toml".as_ref()).expect("locale should load");
    let config = LayoutConfig::default().with_locale(locale);
    let doc = parse("bmc\nchannels:\n  - web\n");
    let result = plan(&doc, 1200.0, 800.0, &CharMetrics::default(), &config);

    let channels = result.block(SectionKey::Channels).unwrap();
    assert_eq!(channels.title_lines.join(" "), "채널");

    let empty = result.block(SectionKey::KeyResources).unwrap();
    assert_eq!(empty.placeholder.as_deref(), Some("여기에 작성"));
}

#[test]
fn test_japanese_locale_loads() {
    let locale = Locale::from_file("locales/ja.toml".as_ref()).expect("locale should load");
    assert_eq!(locale.name.as_deref(), Some("日本語"));
    assert_eq!(locale.section_title(SectionKey::Problem), "課題");
}

#[test]
fn test_custom_measurer_changes_wrapping() {
    struct WideGlyphs;
    impl TextMeasure for WideGlyphs {
        fn width(&self, text: &str, font_size: f64) -> f64 {
            text.chars().count() as f64 * font_size * 1.2
        }
    }

    let doc = parse("bmc\nchannels:\n  - a reasonably long channel name\n");
    let config = LayoutConfig::default();
    let narrow = plan(&doc, 1200.0, 800.0, &WideGlyphs, &config);
    let normal = plan(&doc, 1200.0, 800.0, &CharMetrics::default(), &config);

    let narrow_lines = narrow.block(SectionKey::Channels).unwrap().item_runs[0]
        .bullet_lines
        .len();
    let normal_lines = normal.block(SectionKey::Channels).unwrap().item_runs[0]
        .bullet_lines
        .len();
    assert!(narrow_lines > normal_lines);
}

#[test]
fn test_plan_is_deterministic() {
    let source = "lmc\nproblem:\n  - churn\nkey-metrics:\n  - retention\n";
    assert_eq!(
        plan_source(source, 1024.0, 768.0),
        plan_source(source, 1024.0, 768.0)
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let result = plan_source("bmc\nchannels:\n  - web\n", 1200.0, 800.0);
    let json = serde_json::to_value(&result).expect("plan should serialize");
    assert_eq!(json["blocks"].as_array().unwrap().len(), 9);
    assert_eq!(json["blocks"][0]["section_key"], "customer-segments");
    assert_eq!(json["scale"], 1.0);
}

#[test]
fn test_canvas_types_share_bottom_row_geometry() {
    let bmc = plan_source("bmc\nchannels:\n  - web\n", 1200.0, 800.0);
    let lmc = plan_source("lmc\nproblem:\n  - churn\n", 1200.0, 800.0);
    assert_eq!(
        bmc.block(SectionKey::CostStructure).unwrap().rect,
        lmc.block(SectionKey::CostStructure).unwrap().rect
    );
    assert_eq!(bmc.blocks.len(), lmc.blocks.len());
    assert_eq!(lmc.scale, 1.0);
}
