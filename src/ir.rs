use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DEFAULT_NODE_COLOR: &str = "#666666";
pub const DEFAULT_EDGE_COLOR: &str = "#999999";
pub const DEFAULT_NODE_SIZE: i64 = 10;
pub const DEFAULT_EDGE_WIDTH: i64 = 2;
pub const DEFAULT_OPACITY: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

impl LegendPosition {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-right" => Some(Self::BottomRight),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
}

impl NodeShape {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "diamond" => Some(Self::Diamond),
            "triangle" => Some(Self::Triangle),
            _ => None,
        }
    }

    /// Tag parse for data-supplied shapes. Unrecognized tags render with
    /// square corners rather than as circles.
    pub fn from_tag(tag: &str) -> Self {
        Self::from_token(tag).unwrap_or(Self::Square)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl EdgeStyle {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeLegendEntry {
    pub label: String,
    pub color: String,
    pub shape: NodeShape,
    pub size: i64,
    pub border_color: Option<String>,
    /// `None` when the supplied width could not be read as an integer; the
    /// renderer then draws no border at all.
    pub border_width: Option<i64>,
}

impl NodeLegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            shape: NodeShape::Circle,
            size: DEFAULT_NODE_SIZE,
            border_color: None,
            border_width: Some(0),
        }
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "label": self.label,
            "color": self.color,
            "shape": self.shape.as_str(),
            "size": self.size,
            "border_color": self.border_color,
            "border_width": self.border_width,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLegendEntry {
    pub label: String,
    pub color: String,
    pub width: i64,
    pub style: EdgeStyle,
    pub arrow: bool,
}

impl EdgeLegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            width: DEFAULT_EDGE_WIDTH,
            style: EdgeStyle::Solid,
            arrow: true,
        }
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "label": self.label,
            "color": self.color,
            "width": self.width,
            "style": self.style.as_str(),
            "arrow": self.arrow,
        })
    }
}

/// Display options of a legend, without its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub enabled: bool,
    pub position: LegendPosition,
    pub draggable: bool,
    pub collapsible: bool,
    pub background_color: String,
    pub border_color: String,
    pub opacity: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            position: LegendPosition::TopRight,
            draggable: true,
            collapsible: true,
            background_color: "#ffffff".to_string(),
            border_color: "#cccccc".to_string(),
            opacity: DEFAULT_OPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: LegendPosition,
    pub draggable: bool,
    pub collapsible: bool,
    pub background_color: String,
    pub border_color: String,
    pub opacity: f64,
    pub node_entries: Vec<NodeLegendEntry>,
    pub edge_entries: Vec<EdgeLegendEntry>,
}

impl LegendConfig {
    pub fn new() -> Self {
        Self::from_options(&LegendOptions::default())
    }

    pub fn from_options(options: &LegendOptions) -> Self {
        Self {
            enabled: options.enabled,
            position: options.position,
            draggable: options.draggable,
            collapsible: options.collapsible,
            background_color: options.background_color.clone(),
            border_color: options.border_color.clone(),
            opacity: crate::validate::sanitize_opacity(options.opacity),
            node_entries: Vec::new(),
            edge_entries: Vec::new(),
        }
    }

    pub fn add_node_entry(&mut self, entry: NodeLegendEntry) -> &NodeLegendEntry {
        self.node_entries.push(entry);
        &self.node_entries[self.node_entries.len() - 1]
    }

    pub fn add_edge_entry(&mut self, entry: EdgeLegendEntry) -> &EdgeLegendEntry {
        self.edge_entries.push(entry);
        &self.edge_entries[self.edge_entries.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.node_entries.is_empty() && self.edge_entries.is_empty()
    }

    /// Plain mapping form, with every enum rendered as its string tag.
    pub fn to_dict(&self) -> Value {
        json!({
            "enabled": self.enabled,
            "position": self.position.as_str(),
            "draggable": self.draggable,
            "collapsible": self.collapsible,
            "background_color": self.background_color,
            "border_color": self.border_color,
            "opacity": self.opacity,
            "node_entries": self.node_entries.iter().map(NodeLegendEntry::to_dict).collect::<Vec<_>>(),
            "edge_entries": self.edge_entries.iter().map(EdgeLegendEntry::to_dict).collect::<Vec<_>>(),
        })
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self::new()
    }
}
