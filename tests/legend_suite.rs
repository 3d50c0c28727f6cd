use std::path::Path;

use graph_legend::{
    Config, EdgeStyle, LegendConfig, NodeShape, Palette, from_graph_data, parse_graph_data,
    render_legend, render_legend_html,
};
use pretty_assertions::assert_eq;

fn fixture_path(rel: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

fn load_fixture(rel: &str) -> LegendConfig {
    let input = std::fs::read_to_string(fixture_path(rel)).expect("fixture read failed");
    let data = parse_graph_data(&input).expect("parse failed");
    from_graph_data(&data, true).expect("legend build failed")
}

fn assert_valid_markup(html: &str, fixture: &str) {
    assert!(
        html.starts_with("<div class=\"legend-container\""),
        "{fixture}: missing container"
    );
    assert!(html.ends_with("</div>"), "{fixture}: unterminated container");
    assert!(html.contains(">Legend</h3>"), "{fixture}: missing heading");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "empty.json",
        "typed_nodes.json",
        "explicit_overlap.json",
        "lenient.json5",
    ];

    for rel in candidates {
        let path = fixture_path(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let input = std::fs::read_to_string(&path).expect("fixture read failed");
        for dark_mode in [false, true] {
            let mut config = Config::default();
            config.set_dark_mode(dark_mode);
            let html = render_legend(&input, &config).expect("render failed");
            assert_valid_markup(&html, rel);
        }
    }
}

#[test]
fn empty_graph_renders_only_container_and_heading() {
    let legend = load_fixture("empty.json");
    assert!(legend.is_empty());
    let html = render_legend_html(&legend, false);
    assert_eq!(html.lines().count(), 3);
    assert!(!html.contains("<ul"));
}

#[test]
fn typed_nodes_are_grouped_in_discovery_order() {
    let legend = load_fixture("typed_nodes.json");

    let summary: Vec<(&str, &str, NodeShape, i64)> = legend
        .node_entries
        .iter()
        .map(|e| (e.label.as_str(), e.color.as_str(), e.shape, e.size))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A", "#666666", NodeShape::Circle, 10),
            ("B", "#3366cc", NodeShape::Square, 10),
            ("default", "#666666", NodeShape::Circle, 10),
        ]
    );

    let edges: Vec<(&str, &str, EdgeStyle, i64)> = legend
        .edge_entries
        .iter()
        .map(|e| (e.label.as_str(), e.color.as_str(), e.style, e.width))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("calls", "#999999", EdgeStyle::Dashed, 6),
            ("owns", "teal", EdgeStyle::Solid, 3),
        ]
    );
}

#[test]
fn explicit_entries_are_appended_and_kept() {
    let legend = load_fixture("explicit_overlap.json");
    let labels: Vec<&str> = legend.node_entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Server", "Server", "<script>alert(1)</script>"]);
    assert_eq!(legend.node_entries[1].shape, NodeShape::Diamond);

    let edge_labels: Vec<&str> = legend.edge_entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(edge_labels, vec!["default", "depends on"]);
    assert!(!legend.edge_entries[1].arrow);

    let dict = legend.to_dict();
    assert_eq!(dict["node_entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(dict["edge_entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(dict["node_entries"][1]["shape"], "diamond");
    assert_eq!(dict["edge_entries"][1]["style"], "dotted");
}

#[test]
fn hostile_entries_degrade_safely() {
    let legend = load_fixture("explicit_overlap.json");
    for dark_mode in [false, true] {
        let palette = Palette::for_mode(dark_mode);
        let html = render_legend_html(&legend, dark_mode);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("not-a-color!"));
        assert!(html.contains(&format!(
            "width:7px; height:7px; border-radius:50%; background:{};",
            palette.node_default
        )));
    }
}

#[test]
fn json5_fixture_is_accepted() {
    let legend = load_fixture("lenient.json5");
    assert_eq!(legend.node_entries.len(), 1);
    assert_eq!(legend.node_entries[0].label, "Storage");
    assert_eq!(legend.node_entries[0].color, "hsl(200, 50%, 50%)");
    assert!(legend.edge_entries.is_empty());
}

#[test]
fn config_without_auto_detect_skips_detection() {
    let input = std::fs::read_to_string(fixture_path("typed_nodes.json")).unwrap();
    let config = Config {
        auto_detect: false,
        ..Config::default()
    };
    let html = render_legend(&input, &config).unwrap();
    assert_eq!(html.lines().count(), 3);
}
