use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::ir::DEFAULT_OPACITY;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#(?:[0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
});
static RGB_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)^rgba?\([^)"'<>&]+\)$"#).unwrap());
static HSL_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)^hsla?\([^)"'<>&]+\)$"#).unwrap());
// Any alphabetic token passes; it is not checked against the CSS name table.
static NAMED_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());

pub fn is_valid_color(color: &str) -> bool {
    let color = color.trim();
    if color.is_empty() {
        return false;
    }
    HEX_COLOR_RE.is_match(color)
        || RGB_COLOR_RE.is_match(color)
        || HSL_COLOR_RE.is_match(color)
        || NAMED_COLOR_RE.is_match(color)
}

pub fn is_valid_color_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_color)
}

/// Lenient integer coercion: numbers truncate toward
/// zero, booleans map to 0/1 and integer strings are parsed after trimming.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerced values are floored at 1; only the fallback returns `default`
/// untouched, so a default of 0 survives but a coerced 0 does not.
pub fn sanitize_dimension(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) => v.max(1),
        None => default,
    }
}

pub fn sanitize_opacity(opacity: f64) -> f64 {
    if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        DEFAULT_OPACITY
    }
}

/// SVG `stroke-dasharray` for an edge style tag.
pub fn dash_pattern(style: &str) -> &'static str {
    match style.to_ascii_lowercase().as_str() {
        "dashed" => "4,3",
        "dotted" => "1,3",
        _ => "none",
    }
}

/// CSS `border-radius` for a node shape tag.
pub fn shape_radius(shape: &str) -> &'static str {
    if shape.eq_ignore_ascii_case("circle") {
        "50%"
    } else {
        "4px"
    }
}
