//! Static-site generator for the TechConsult Pro landing page.
//!
//! Renders the page once and writes it to disk (or stdout). This binary is
//! the crate's only I/O surface; the rendering itself is infallible.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use techconsult_landing::render_page;

#[derive(Parser, Debug)]
#[command(name = "techconsult-landing")]
#[command(about = "Render the TechConsult Pro landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file path
    #[arg(long, short, default_value = "index.html")]
    output: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let html = render_page();

    if args.stdout {
        println!("{html}");
        return Ok(());
    }

    std::fs::write(&args.output, &html)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!("wrote {} ({} bytes)", args.output.display(), html.len());

    Ok(())
}
