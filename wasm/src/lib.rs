use graph_legend::{Config, LegendPosition, render_legend};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegendRenderOptions {
    theme: Option<String>,
    dark_mode: Option<bool>,
    auto_detect: Option<bool>,
    position: Option<String>,
    opacity: Option<f64>,
}

fn build_config(options: LegendRenderOptions) -> Config {
    let mut config = Config::default();
    let dark_mode = options
        .dark_mode
        .unwrap_or(options.theme.as_deref() == Some("dark"));
    config.set_dark_mode(dark_mode);

    if let Some(auto_detect) = options.auto_detect {
        config.auto_detect = auto_detect;
    }
    if let Some(position) = options.position.as_deref().and_then(LegendPosition::from_token) {
        config.legend.position = position;
    }
    if let Some(opacity) = options.opacity {
        config.legend.opacity = opacity;
    }

    config
}

#[wasm_bindgen]
pub fn render_legend_html(graph_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<LegendRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        LegendRenderOptions::default()
    };

    let config = build_config(options);
    render_legend(graph_json, &config).map_err(|error| JsValue::from_str(&error.to_string()))
}
