use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use inkpath::{init_logging, EditorSettings, EditorState, BUILD_DATE, VERSION};

/// Open an SVG drawing and write it back out in normalized form.
#[derive(Parser, Debug)]
#[command(name = "inkpath", version, about)]
struct Args {
    /// SVG file to open
    input: PathBuf,

    /// Where to write the normalized SVG (stdout when omitted)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;

    tracing::info!("inkpath {} (built {})", VERSION, BUILD_DATE);

    let settings = EditorSettings::load_or_default();
    let mut editor = EditorState::with_settings(settings);
    editor
        .load_from_file(&args.input)
        .with_context(|| format!("Could not open {}", args.input.display()))?;

    for layer in editor.document.layers() {
        tracing::info!("Layer '{}': {} shape(s)", layer.id, layer.objects.len());
    }

    match args.output {
        Some(path) => editor.save_to_file(&path)?,
        None => print!("{}", editor.export_markup()),
    }

    Ok(())
}
