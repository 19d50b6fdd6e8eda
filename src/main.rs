use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tintgen::scanner::DEFAULT_FUNCTION_NAME;
use tintgen::{render_c, PatternTable, ScannerGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitKind {
    /// Rendered C function
    C,
    /// Instruction tree as JSON
    Ir,
}

#[derive(Parser)]
#[command(
    name = "tintgen",
    about = "Compiles a color-name mapping into an in-place substitution scanner"
)]
struct Cli {
    /// JSON object mapping pattern keys to replacement strings
    mapping: PathBuf,

    /// Name of the generated function
    #[arg(long, default_value = DEFAULT_FUNCTION_NAME)]
    function_name: String,

    /// Character written in front of each replacement
    #[arg(long, default_value_t = '#')]
    marker: char,

    /// What to emit
    #[arg(long, value_enum, default_value_t = EmitKind::C)]
    emit: EmitKind,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    anyhow::ensure!(cli.marker.is_ascii(), "marker must be an ASCII character");

    let table = PatternTable::load_json_file(&cli.mapping)
        .with_context(|| format!("loading mapping {}", cli.mapping.display()))?;
    info!(patterns = table.len(), "loaded pattern table");

    let program = ScannerGenerator::new()
        .with_function_name(&cli.function_name)
        .with_marker(cli.marker as u8)
        .generate(&table)
        .context("generating scanner")?;

    let rendered = match cli.emit {
        EmitKind::C => render_c(&program),
        EmitKind::Ir => {
            let mut json = serde_json::to_string_pretty(&program)
                .context("serializing instruction tree")?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries nothing but generated output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
