use crate::ir::{LegendOptions, LegendPosition};
use crate::theme::Palette;
use crate::validate::{is_valid_color, sanitize_opacity};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dark_mode: bool,
    pub palette: Palette,
    pub legend: LegendOptions,
    pub auto_detect: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            palette: Palette::light(),
            legend: LegendOptions::default(),
            auto_detect: true,
        }
    }
}

impl Config {
    /// Switch to the dark or light palette, discarding palette overrides.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.palette = Palette::for_mode(dark_mode);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteVariables {
    background: Option<String>,
    text: Option<String>,
    border: Option<String>,
    heading: Option<String>,
    node_default: Option<String>,
    edge_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegendOptionsFile {
    enabled: Option<bool>,
    position: Option<String>,
    draggable: Option<bool>,
    collapsible: Option<bool>,
    background_color: Option<String>,
    border_color: Option<String>,
    opacity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    palette: Option<PaletteVariables>,
    legend: Option<LegendOptionsFile>,
    auto_detect: Option<bool>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.set_dark_mode(true);
        } else if theme_name == "light" || theme_name == "default" {
            config.set_dark_mode(false);
        } else {
            tracing::warn!("unknown theme '{}', keeping the light palette", theme_name);
        }
    }

    if let Some(vars) = parsed.palette {
        let palette = &mut config.palette;
        override_color(&mut palette.background, vars.background, "background");
        override_color(&mut palette.text, vars.text, "text");
        override_color(&mut palette.border, vars.border, "border");
        override_color(&mut palette.heading, vars.heading, "heading");
        override_color(&mut palette.node_default, vars.node_default, "nodeDefault");
        override_color(&mut palette.edge_default, vars.edge_default, "edgeDefault");
    }

    if let Some(legend) = parsed.legend {
        if let Some(v) = legend.enabled {
            config.legend.enabled = v;
        }
        if let Some(v) = legend.position.as_deref() {
            match LegendPosition::from_token(v) {
                Some(position) => config.legend.position = position,
                None => tracing::warn!("unknown legend position '{}', keeping default", v),
            }
        }
        if let Some(v) = legend.draggable {
            config.legend.draggable = v;
        }
        if let Some(v) = legend.collapsible {
            config.legend.collapsible = v;
        }
        if let Some(v) = legend.background_color {
            config.legend.background_color = v;
        }
        if let Some(v) = legend.border_color {
            config.legend.border_color = v;
        }
        if let Some(v) = legend.opacity {
            config.legend.opacity = sanitize_opacity(v);
        }
    }

    if let Some(v) = parsed.auto_detect {
        config.auto_detect = v;
    }

    Ok(config)
}

fn override_color(slot: &mut String, value: Option<String>, name: &str) {
    let Some(value) = value else {
        return;
    };
    if is_valid_color(&value) {
        *slot = value;
    } else {
        tracing::warn!("invalid palette color {}='{}', keeping '{}'", name, value, slot);
    }
}
