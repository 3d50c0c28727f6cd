use crate::builder::{from_graph_data_with, parse_graph_data};
use crate::config::load_config;
use crate::render::{render_html, write_output};
use crate::template;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "legendr", version, about = "Derive and render graph legends as HTML")]
pub struct Args {
    /// Graph data file (node-link JSON or JSON5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "html")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, palette overrides, legend options)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Use the dark palette
    #[arg(long = "dark")]
    pub dark: bool,

    /// Only use explicit metadata.node_legend / metadata.edge_legend entries
    #[arg(long = "no-auto-detect")]
    pub no_auto_detect: bool,

    /// Host document with §legend§ and §legend_config§ placeholders
    #[arg(short = 't', long = "template")]
    pub template: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = load_config(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    if args.dark {
        config.set_dark_mode(true);
    }
    if args.no_auto_detect {
        config.auto_detect = false;
    }

    let input = read_input(args.input.as_deref())?;
    let graph_data = parse_graph_data(&input)?;
    let legend = from_graph_data_with(&graph_data, &config.legend, config.auto_detect)?;
    tracing::info!(
        "legend has {} node and {} edge entries",
        legend.node_entries.len(),
        legend.edge_entries.len()
    );

    let html = render_html(&legend, &config.palette);
    let legend_json = template::to_json(&legend.to_dict())?;

    let rendered = match (&args.template, args.output_format) {
        (Some(path), _) => {
            let host = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            template::insert(
                &host,
                [("legend", html.as_str()), ("legend_config", legend_json.as_str())],
            )
        }
        (None, OutputFormat::Html) => html,
        (None, OutputFormat::Json) => legend_json,
    };

    write_output(&rendered, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read graph data {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
