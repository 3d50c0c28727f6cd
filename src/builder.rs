use serde_json::{Map, Value};

use crate::detect::{detect_edge_categories, detect_node_categories, scalar_text};
use crate::error::{LegendError, Result, kind_of};
use crate::ir::{
    DEFAULT_EDGE_COLOR, DEFAULT_EDGE_WIDTH, DEFAULT_NODE_COLOR, DEFAULT_NODE_SIZE,
    EdgeLegendEntry, EdgeStyle, LegendConfig, LegendOptions, NodeLegendEntry, NodeShape,
};
use crate::validate::coerce_int;

/// Parse graph data text, accepting JSON5 when strict JSON fails.
pub fn parse_graph_data(input: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => Ok(value),
        Err(json_err) => json5::from_str::<Value>(input).map_err(|json5_err| {
            tracing::debug!("strict JSON parse failed: {}", json_err);
            LegendError::Parse(json5_err.to_string())
        }),
    }
}

pub fn from_graph_data(graph_data: &Value, auto_detect: bool) -> Result<LegendConfig> {
    from_graph_data_with(graph_data, &LegendOptions::default(), auto_detect)
}

/// Assemble a legend: auto-detected categories first (when enabled), then any
/// explicit `metadata.node_legend` / `metadata.edge_legend` rows.
#[tracing::instrument(skip_all, fields(auto_detect = auto_detect))]
pub fn from_graph_data_with(
    graph_data: &Value,
    options: &LegendOptions,
    auto_detect: bool,
) -> Result<LegendConfig> {
    let Some(root) = graph_data.as_object() else {
        return Err(LegendError::NotAnObject {
            found: kind_of(graph_data),
        });
    };
    let mut legend = LegendConfig::from_options(options);

    if auto_detect {
        let nodes = list_field(root, "nodes", "nodes")?;
        for (label, category) in detect_node_categories(nodes)? {
            legend.add_node_entry(NodeLegendEntry {
                shape: category.shape,
                size: category.size,
                ..NodeLegendEntry::new(label, category.color)
            });
        }

        let edges = list_field(root, "edges", "edges")?;
        for (label, category) in detect_edge_categories(edges)? {
            legend.add_edge_entry(EdgeLegendEntry {
                width: category.width,
                style: category.style,
                ..EdgeLegendEntry::new(label, category.color)
            });
        }
    }

    let metadata = match root.get("metadata") {
        None => None,
        Some(Value::Object(metadata)) => Some(metadata),
        Some(other) => {
            return Err(LegendError::MalformedRecord {
                field: "metadata",
                index: 0,
                found: kind_of(other),
            });
        }
    };

    if let Some(metadata) = metadata {
        if metadata.contains_key("node_legend") {
            let explicit = list_field(metadata, "node_legend", "metadata.node_legend")?;
            merge_explicit_nodes(&mut legend, explicit)?;
        }
        if metadata.contains_key("edge_legend") {
            let explicit = list_field(metadata, "edge_legend", "metadata.edge_legend")?;
            merge_explicit_edges(&mut legend, explicit)?;
        }
    }

    tracing::debug!(
        "assembled legend with {} node and {} edge entries",
        legend.node_entries.len(),
        legend.edge_entries.len()
    );
    Ok(legend)
}

/// Append explicit node rows. Rows are never de-duplicated against detected
/// categories.
pub fn merge_explicit_nodes(legend: &mut LegendConfig, explicit: &[Value]) -> Result<()> {
    for (index, entry) in explicit.iter().enumerate() {
        let entry = explicit_record(entry, "metadata.node_legend", index)?;
        legend.add_node_entry(NodeLegendEntry {
            label: label_of(entry),
            color: color_of(entry, "color").unwrap_or_else(|| DEFAULT_NODE_COLOR.to_string()),
            shape: entry
                .get("shape")
                .and_then(Value::as_str)
                .map(NodeShape::from_tag)
                .unwrap_or_default(),
            size: int_of(entry, "size").unwrap_or(DEFAULT_NODE_SIZE),
            border_color: color_of(entry, "border_color"),
            border_width: match entry.get("border_width") {
                None => Some(0),
                Some(value) => coerce_int(value),
            },
        });
    }
    tracing::trace!("merged {} explicit node entries", explicit.len());
    Ok(())
}

pub fn merge_explicit_edges(legend: &mut LegendConfig, explicit: &[Value]) -> Result<()> {
    for (index, entry) in explicit.iter().enumerate() {
        let entry = explicit_record(entry, "metadata.edge_legend", index)?;
        legend.add_edge_entry(EdgeLegendEntry {
            label: label_of(entry),
            color: color_of(entry, "color").unwrap_or_else(|| DEFAULT_EDGE_COLOR.to_string()),
            width: int_of(entry, "width").unwrap_or(DEFAULT_EDGE_WIDTH),
            style: entry
                .get("style")
                .and_then(Value::as_str)
                .and_then(EdgeStyle::from_token)
                .unwrap_or_default(),
            arrow: entry.get("arrow").and_then(Value::as_bool).unwrap_or(true),
        });
    }
    tracing::trace!("merged {} explicit edge entries", explicit.len());
    Ok(())
}

fn list_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<&'a [Value]> {
    match object.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(LegendError::NotAList {
            field,
            found: kind_of(other),
        }),
    }
}

fn explicit_record<'a>(
    entry: &'a Value,
    field: &'static str,
    index: usize,
) -> Result<&'a Map<String, Value>> {
    entry.as_object().ok_or(LegendError::MalformedRecord {
        field,
        index,
        found: kind_of(entry),
    })
}

fn label_of(entry: &Map<String, Value>) -> String {
    entry
        .get("label")
        .and_then(scalar_text)
        .unwrap_or_default()
}

fn color_of(entry: &Map<String, Value>, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_of(entry: &Map<String, Value>, key: &str) -> Option<i64> {
    entry.get(key).and_then(coerce_int)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::LegendPosition;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_graph_yields_empty_legend() {
        let legend = from_graph_data(&json!({"nodes": [], "edges": []}), true).unwrap();
        assert!(legend.is_empty());
        assert_eq!(legend, LegendConfig::new());
    }

    #[test]
    fn explicit_entries_follow_detected_ones() {
        let data = json!({
            "nodes": [{"type": "Server", "color": "#336699"}],
            "edges": [],
            "metadata": {
                "node_legend": [
                    {"label": "Server", "color": "#ff0000", "shape": "square", "size": "14",
                     "border_color": "#000", "border_width": 2},
                    {"label": "Client"}
                ]
            }
        });
        let legend = from_graph_data(&data, true).unwrap();
        let labels: Vec<&str> = legend.node_entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Server", "Server", "Client"]);

        let explicit = &legend.node_entries[1];
        assert_eq!(explicit.shape, NodeShape::Square);
        assert_eq!(explicit.size, 14);
        assert_eq!(explicit.border_color.as_deref(), Some("#000"));
        assert_eq!(explicit.border_width, Some(2));

        let bare = &legend.node_entries[2];
        assert_eq!(bare.color, DEFAULT_NODE_COLOR);
        assert_eq!(bare.size, DEFAULT_NODE_SIZE);
        assert_eq!(bare.border_color, None);
        assert_eq!(bare.border_width, Some(0));
    }

    #[test]
    fn unreadable_border_width_is_kept_unset() {
        let data = json!({"metadata": {"node_legend": [
            {"label": "thick", "border_width": "thick"},
            {"label": "hex", "shape": "hexagon"},
        ]}});
        let legend = from_graph_data(&data, false).unwrap();
        assert_eq!(legend.node_entries[0].border_width, None);
        assert_eq!(legend.node_entries[0].shape, NodeShape::Circle);
        assert_eq!(legend.node_entries[1].border_width, Some(0));
        assert_eq!(legend.node_entries[1].shape, NodeShape::Square);
    }

    #[test]
    fn explicit_entries_merge_without_auto_detect() {
        let data = json!({
            "nodes": [{"type": "ignored"}],
            "edges": [{"type": "ignored"}],
            "metadata": {
                "edge_legend": [{"label": "depends on", "style": "dotted", "arrow": false, "width": 3}]
            }
        });
        let legend = from_graph_data(&data, false).unwrap();
        assert!(legend.node_entries.is_empty());
        assert_eq!(
            legend.edge_entries,
            vec![EdgeLegendEntry {
                label: "depends on".to_string(),
                color: DEFAULT_EDGE_COLOR.to_string(),
                width: 3,
                style: EdgeStyle::Dotted,
                arrow: false,
            }]
        );
    }

    #[test]
    fn to_dict_counts_detected_and_explicit_entries() {
        let data = json!({
            "nodes": [{"type": "A"}, {"type": "B"}, {"type": "A"}],
            "edges": [{"type": "x"}],
            "metadata": {"node_legend": [{"label": "A"}], "edge_legend": [{"label": "y"}]}
        });
        let dict = from_graph_data(&data, true).unwrap().to_dict();
        assert_eq!(dict["node_entries"].as_array().map(Vec::len), Some(3));
        assert_eq!(dict["edge_entries"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn options_seed_display_fields() {
        let options = LegendOptions {
            position: LegendPosition::Left,
            opacity: 3.0,
            ..LegendOptions::default()
        };
        let legend = from_graph_data_with(&json!({}), &options, true).unwrap();
        assert_eq!(legend.position, LegendPosition::Left);
        assert_eq!(legend.opacity, 1.0);
    }

    #[test]
    fn structural_errors_surface() {
        assert!(matches!(
            from_graph_data(&json!([1, 2]), true),
            Err(LegendError::NotAnObject { .. })
        ));
        assert!(matches!(
            from_graph_data(&json!({"nodes": {"a": 1}}), true),
            Err(LegendError::NotAList { field: "nodes", .. })
        ));
        assert!(matches!(
            from_graph_data(&json!({"metadata": {"node_legend": "x"}}), false),
            Err(LegendError::NotAList { field: "metadata.node_legend", .. })
        ));
        assert!(matches!(
            from_graph_data(&json!({"metadata": {"edge_legend": [3]}}), false),
            Err(LegendError::MalformedRecord { field: "metadata.edge_legend", index: 0, .. })
        ));
        assert!(matches!(
            from_graph_data(&json!({"metadata": "x"}), false),
            Err(LegendError::MalformedRecord { field: "metadata", .. })
        ));
    }

    #[test]
    fn parses_json5_input() {
        let value = parse_graph_data("{nodes: [{type: 'A',}], // trailing\n}").unwrap();
        assert_eq!(value["nodes"][0]["type"], "A");
        assert!(matches!(parse_graph_data("{nodes: ["), Err(LegendError::Parse(_))));
    }
}
