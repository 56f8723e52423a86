use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use figsimplify::{simplify_design, SimplifyOptions};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Parser)]
#[command(name = "figsimplify")]
#[command(version, about = "Simplify Figma API JSON into a compact design description")]
#[command(long_about = "Simplify Figma API JSON into a compact design description\n\n\
    Accepts a saved response of GET /v1/files/:key or GET /v1/files/:key/nodes.\n\
    Output is YAML by default.\n\n  \
    figsimplify file.json [-o design.yaml] [--format json] [--compact] [-v]\n  \
    curl ... | figsimplify - --assets")]
struct Cli {
    /// Input JSON file path, or `-` for stdin
    input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Compact JSON output (ignored for YAML)
    #[arg(long)]
    compact: bool,

    /// Deepest node level to emit (top-level nodes are level 0)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print only the image assets instead of the whole design
    #[arg(long)]
    assets: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    tracing::debug!(input = %cli.input.display(), "reading input");
    let json = read_input(&cli.input)?;

    let raw = figsimplify::parse_raw_design(&json).context("Failed to parse design response")?;
    tracing::debug!(top_level_nodes = raw.nodes.len(), name = %raw.name, "parsed response");

    let options = SimplifyOptions {
        max_depth: cli.max_depth,
    };
    let design = simplify_design(&raw, &options).context("Failed to simplify design")?;

    let output = match (cli.assets, cli.format) {
        (true, OutputFormat::Yaml) => serde_yaml::to_string(&design.image_assets)?,
        (true, OutputFormat::Json) => to_json(&design.image_assets, cli.compact)?,
        (false, OutputFormat::Yaml) => figsimplify::to_yaml(&design)?,
        (false, OutputFormat::Json) => to_json(&design, cli.compact)?,
    };

    match cli.output.as_ref() {
        Some(path) => {
            tracing::debug!(output = %path.display(), "writing output");
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read stdin")?;
        return Ok(json);
    }

    fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

/// Pretty by default, compact if requested
fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    Ok(if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    })
}
