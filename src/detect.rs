//! Category detection over node and edge records.
//!
//! Records are grouped by `legend_category`, then `type`, then `"default"`.
//! Each group keeps insertion-ordered sets of the colors, shapes/styles and
//! sizes/widths seen, and is summarized into one legend row. When a group is
//! not visually homogeneous the first-seen color and shape/style win.

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::error::{LegendError, Result, kind_of};
use crate::ir::{
    DEFAULT_EDGE_COLOR, DEFAULT_EDGE_WIDTH, DEFAULT_NODE_COLOR, DEFAULT_NODE_SIZE, EdgeStyle,
    NodeShape,
};

pub const DEFAULT_CATEGORY: &str = "default";

#[derive(Debug, Clone, PartialEq)]
pub struct NodeCategory {
    pub color: String,
    pub shape: NodeShape,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCategory {
    pub color: String,
    pub style: EdgeStyle,
    pub width: i64,
}

#[derive(Debug, Default)]
struct Accumulator {
    colors: IndexSet<String>,
    kinds: IndexSet<String>,
    sizes: Vec<f64>,
}

impl Accumulator {
    fn add_color(&mut self, value: Option<&Value>) {
        if let Some(color) = value.and_then(Value::as_str) {
            if !color.trim().is_empty() {
                self.colors.insert(color.to_string());
            }
        }
    }

    fn add_kind(&mut self, value: Option<&Value>) {
        if let Some(kind) = value.and_then(Value::as_str) {
            self.kinds.insert(kind.to_string());
        }
    }

    fn add_size(&mut self, value: Option<&Value>) {
        let Some(size) = value.and_then(Value::as_f64) else {
            return;
        };
        if size.is_finite() && !self.sizes.contains(&size) {
            self.sizes.push(size);
        }
    }

    fn color(&self, default: &str) -> String {
        self.colors
            .first()
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn kind(&self) -> Option<&str> {
        self.kinds.first().map(String::as_str)
    }

    /// Integer mean of the distinct sizes, truncated toward zero.
    fn average_size(&self, default: i64) -> i64 {
        if self.sizes.is_empty() {
            return default;
        }
        let total: f64 = self.sizes.iter().sum();
        (total / self.sizes.len() as f64).trunc() as i64
    }
}

#[tracing::instrument(skip_all)]
pub fn detect_node_categories(nodes: &[Value]) -> Result<IndexMap<String, NodeCategory>> {
    let mut groups: IndexMap<String, Accumulator> = IndexMap::new();

    for (index, node) in nodes.iter().enumerate() {
        let attrs = record_attributes(node, "nodes", index)?;
        let group = groups.entry(category_key(attrs)).or_default();
        group.add_color(attrs.get("color"));
        group.add_kind(attrs.get("shape"));
        group.add_size(attrs.get("size"));
    }

    let categories: IndexMap<String, NodeCategory> = groups
        .into_iter()
        .map(|(label, group)| {
            let category = NodeCategory {
                color: group.color(DEFAULT_NODE_COLOR),
                shape: group
                    .kind()
                    .map(NodeShape::from_tag)
                    .unwrap_or_default(),
                size: group.average_size(DEFAULT_NODE_SIZE),
            };
            if group.colors.len() > 1 || group.kinds.len() > 1 {
                tracing::debug!(
                    "node category '{}' mixes styles, using first seen ({})",
                    label,
                    category.color
                );
            }
            (label, category)
        })
        .collect();

    tracing::trace!("detected {} node categories", categories.len());
    Ok(categories)
}

#[tracing::instrument(skip_all)]
pub fn detect_edge_categories(edges: &[Value]) -> Result<IndexMap<String, EdgeCategory>> {
    let mut groups: IndexMap<String, Accumulator> = IndexMap::new();

    for (index, edge) in edges.iter().enumerate() {
        let attrs = record_attributes(edge, "edges", index)?;
        let group = groups.entry(category_key(attrs)).or_default();
        group.add_color(attrs.get("color"));
        group.add_kind(attrs.get("style"));
        group.add_size(edge_weight(attrs));
    }

    let categories: IndexMap<String, EdgeCategory> = groups
        .into_iter()
        .map(|(label, group)| {
            let category = EdgeCategory {
                color: group.color(DEFAULT_EDGE_COLOR),
                style: group
                    .kind()
                    .and_then(EdgeStyle::from_token)
                    .unwrap_or_default(),
                width: group.average_size(DEFAULT_EDGE_WIDTH),
            };
            if group.colors.len() > 1 || group.kinds.len() > 1 {
                tracing::debug!(
                    "edge category '{}' mixes styles, using first seen ({})",
                    label,
                    category.color
                );
            }
            (label, category)
        })
        .collect();

    tracing::trace!("detected {} edge categories", categories.len());
    Ok(categories)
}

/// Attribute map of a node or edge record: its nested `metadata` object when
/// present, otherwise the record itself.
pub(crate) fn record_attributes<'a>(
    record: &'a Value,
    field: &'static str,
    index: usize,
) -> Result<&'a Map<String, Value>> {
    let Some(object) = record.as_object() else {
        return Err(LegendError::MalformedRecord {
            field,
            index,
            found: kind_of(record),
        });
    };
    match object.get("metadata") {
        None => Ok(object),
        Some(Value::Object(metadata)) => Ok(metadata),
        Some(other) => Err(LegendError::MalformedRecord {
            field,
            index,
            found: kind_of(other),
        }),
    }
}

fn category_key(attrs: &Map<String, Value>) -> String {
    attrs
        .get("legend_category")
        .and_then(scalar_text)
        .or_else(|| attrs.get("type").and_then(scalar_text))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Text of a scalar attribute; `null` and containers count as absent.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn edge_weight(attrs: &Map<String, Value>) -> Option<&Value> {
    attrs
        .get("weight")
        .filter(|value| !value.is_null())
        .or_else(|| attrs.get("width"))
}
