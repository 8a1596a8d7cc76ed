use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chameleon::cli::Args;
use chameleon::pipeline::generate::generate_palette_with;
use chameleon::tui::print_preview;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chameleon=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    args.validate()?;

    let seeds = args.effective_seeds();
    debug!(
        seeds = ?seeds.iter().map(|c| c.to_hex()).collect::<Vec<_>>(),
        "resolved seed list"
    );
    let palette = generate_palette_with(&seeds, args.total(), args.blend);

    if args.preview {
        print_preview(&palette, "Palette")?;
    }

    let snippet = args.format.snippet();
    match &args.output {
        Some(path) => {
            snippet.write_to(&palette, path)?;
            eprintln!("Wrote {} snippet to {}", snippet.name(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(snippet.render(&palette).as_bytes())
                .context("failed to write snippet to stdout")?;
        }
    }

    Ok(())
}
