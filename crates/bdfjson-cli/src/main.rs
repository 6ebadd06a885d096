use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use bdfjson::BdfFont;
use clap::Parser;

use crate::console::ConsoleReport;
mod console;

#[derive(Parser)]
#[command(name = "bdfjson", about = "Convert a BDF bitmap font to JSON glyph data")]
struct Cli {
    /// Input BDF font file
    #[arg(short, long)]
    input: PathBuf,
    /// Output JSON file
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();
    println!(
        "converting {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    let bytes =
        fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let mut report = ConsoleReport;
    let font = BdfFont::from_bytes_with(&bytes, &mut report)?;
    let json = serde_json::to_string(&font)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!(
        "wrote {} glyphs in {:.2?}",
        font.chars.len(),
        started.elapsed()
    );
    Ok(())
}
