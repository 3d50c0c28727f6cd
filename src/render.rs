use crate::builder::from_graph_data;
use crate::error::Result as LegendResult;
use crate::ir::{EdgeLegendEntry, LegendConfig, NodeLegendEntry};
use crate::theme::Palette;
use crate::validate::{dash_pattern, is_valid_color, sanitize_dimension, shape_radius};
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

pub const NODE_SIZE_PADDING: i64 = 6;
pub const SVG_LINE_LENGTH: i64 = 50;
pub const ITEM_MARGIN: i64 = 6;
pub const MAX_WIDTH: i64 = 260;

const SECTION_HEADING_STYLE: &str = "margin:4px 0 6px 0; font-size:13px; font-weight:600;";
const LIST_OPEN: &str = "<ul style=\"list-style:none; padding:0; margin:0;\">";

/// Detect a legend from graph data and render it with the light or dark palette.
pub fn build_html(graph_data: &Value, dark_mode: bool) -> LegendResult<String> {
    let legend = from_graph_data(graph_data, true)?;
    Ok(render_legend_html(&legend, dark_mode))
}

pub fn render_legend_html(legend: &LegendConfig, dark_mode: bool) -> String {
    render_html(legend, &Palette::for_mode(dark_mode))
}

pub fn render_html(legend: &LegendConfig, palette: &Palette) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<div class=\"legend-container\" role=\"figure\" aria-label=\"Graph legend\" style=\"font-family: Inter, Arial, sans-serif; font-size: 14px; color:{}; background:{}; border:1px solid {}; border-radius:12px; box-shadow:0 2px 8px rgba(0,0,0,0.15); padding:16px 20px; width:fit-content; max-width:{MAX_WIDTH}px; opacity:{}; backdrop-filter:blur(6px);\">",
        escape_html(&palette.text),
        escape_html(&palette.background),
        escape_html(&palette.border),
        crate::validate::sanitize_opacity(legend.opacity)
    ));
    parts.push(format!(
        "<h3 style=\"margin:0 0 12px 0; font-size:16px; color:{}; font-weight:600;\">Legend</h3>",
        escape_html(&palette.heading)
    ));

    if !legend.node_entries.is_empty() {
        parts.push("<div class=\"node-legend\" style=\"margin-bottom:14px;\">".to_string());
        parts.push(format!("<h4 style=\"{SECTION_HEADING_STYLE}\">Nodes</h4>"));
        parts.push(LIST_OPEN.to_string());
        for entry in &legend.node_entries {
            parts.push(node_item(entry, palette));
        }
        parts.push("</ul></div>".to_string());
    }

    if !legend.edge_entries.is_empty() {
        parts.push("<div class=\"edge-legend\">".to_string());
        parts.push(format!("<h4 style=\"{SECTION_HEADING_STYLE}\">Edges</h4>"));
        parts.push(LIST_OPEN.to_string());
        for entry in &legend.edge_entries {
            parts.push(edge_item(entry, palette));
        }
        parts.push("</ul></div>".to_string());
    }

    parts.push("</div>".to_string());
    parts.join("\n")
}

fn node_item(entry: &NodeLegendEntry, palette: &Palette) -> String {
    let color = if is_valid_color(&entry.color) {
        escape_html(&entry.color)
    } else {
        escape_html(&palette.node_default)
    };
    let border_color = match entry.border_color.as_deref() {
        Some(border) if is_valid_color(border) => escape_html(border),
        _ => escape_html(&palette.border),
    };
    let size = sanitize_dimension(Some(entry.size), 10).saturating_add(NODE_SIZE_PADDING);
    let border_width = sanitize_dimension(entry.border_width, 0);
    let radius = shape_radius(entry.shape.as_str());

    format!(
        "<li style=\"display:flex; align-items:center; margin:{ITEM_MARGIN}px 0;\"><span style=\"display:inline-block; width:{size}px; height:{size}px; border-radius:{radius}; background:{color}; border:{border_width}px solid {border_color}; margin-right:10px; flex-shrink:0;\" aria-hidden=\"true\"></span><span>{}</span></li>",
        escape_html(&entry.label)
    )
}

fn edge_item(entry: &EdgeLegendEntry, palette: &Palette) -> String {
    let stroke = if is_valid_color(&entry.color) {
        escape_html(&entry.color)
    } else {
        escape_html(&palette.edge_default)
    };
    let width = sanitize_dimension(Some(entry.width), 2);
    let height = width.saturating_mul(2);
    let stroke_width = width as f64 / 10.0;
    let dash = dash_pattern(entry.style.as_str());

    format!(
        "<li style=\"display:flex; align-items:center; margin:{ITEM_MARGIN}px 0;\"><svg width=\"{SVG_LINE_LENGTH}\" height=\"{height}\" viewBox=\"0 0 {SVG_LINE_LENGTH} {height}\" style=\"margin-right:10px; display:block; flex-shrink:0;\" aria-hidden=\"true\"><line x1=\"0\" y1=\"{width}\" x2=\"{SVG_LINE_LENGTH}\" y2=\"{width}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" stroke-dasharray=\"{dash}\" stroke-linecap=\"round\" /></svg><span>{}</span></li>",
        escape_html(&entry.label)
    )
}

pub fn write_output(markup: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, markup)?;
        }
        None => {
            print!("{}", markup);
        }
    }
    Ok(())
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
