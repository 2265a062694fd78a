//! Command-line interface for rendering identicons to files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use identicon_renderer::{DEFAULT_SIZE, RenderOptions, render};

/// Render an identicon PNG from a hash.
#[derive(Parser, Debug)]
#[command(name = "identicon", version, about)]
struct Args {
    /// Hash to render; missing or shorter than 20 bytes uses the default hash.
    hash: Option<String>,

    /// Square output size in pixels.
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: u32,

    /// Key out the white background as transparent.
    #[arg(short, long)]
    transparent: bool,

    /// Output file path.
    #[arg(short, long, default_value = "identicon.png")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let options = RenderOptions::new()
        .with_size(args.size)
        .with_transparent(args.transparent);

    let icon = match render(args.hash.as_deref().unwrap_or(""), &options) {
        Ok(icon) => icon,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(&args.output, icon.bytes()) {
        eprintln!("error: failed to write {}: {err}", args.output.display());
        return ExitCode::FAILURE;
    }

    println!("{} ({} bytes)", args.output.display(), icon.len());
    ExitCode::SUCCESS
}
