use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use imgascii::{AsciiConfig, MonoFontRenderer, convert_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an image as colored ASCII art, keeping its format")]
struct Cli {
    /// Input image (PNG, JPEG or GIF); output goes to <stem>_processed<ext>
    input: PathBuf,
}

fn main() -> Result<()> {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("converting {:?}", cli.input);

    let output = convert_file(&cli.input, &MonoFontRenderer::default(), &AsciiConfig::default())
        .with_context(|| format!("failed to convert {:?}", cli.input))?;

    println!("Completed! Wrote {}", output.display());
    Ok(())
}
