pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod ir;
pub mod render;
pub mod template;
pub mod theme;
pub mod validate;

pub use builder::{from_graph_data, from_graph_data_with, parse_graph_data};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config, parse_config};
pub use error::LegendError;
pub use ir::{
    EdgeLegendEntry, EdgeStyle, LegendConfig, LegendOptions, LegendPosition, NodeLegendEntry,
    NodeShape,
};
pub use render::{build_html, render_html, render_legend_html};
pub use theme::Palette;

/// Parse graph data text and render its legend with the given configuration.
pub fn render_legend(graph_json: &str, config: &Config) -> Result<String, LegendError> {
    let graph_data = parse_graph_data(graph_json)?;
    let legend = from_graph_data_with(&graph_data, &config.legend, config.auto_detect)?;
    Ok(render_html(&legend, &config.palette))
}
