// Command-line entry point for flowsketch.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use clap::Parser;

use flowsketch::application::VisualizeUsecase;
use flowsketch::infrastructure::PythonParser;
use flowsketch::ports::dot_exporter::DotExporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to visualize
    source: PathBuf,

    /// Output DOT path (defaults to the source path with a .dot extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the DOT to SVG and open it in the system viewer
    #[arg(long)]
    view: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.source)
        .with_context(|| format!("cannot read {}", cli.source.display()))?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.source.with_extension("dot"));

    let usecase = VisualizeUsecase {
        parser: &PythonParser,
        exporter: &DotExporter,
    };
    usecase.run(&source, &output)?;
    println!("Flowchart written to {}", output.display());

    if cli.view {
        let svg = DotExporter::render_svg(&output)?;
        open_viewer(&svg)?;
    }

    Ok(())
}

fn open_viewer(path: &Path) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    Command::new(opener)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch {}", opener))?;
    Ok(())
}
