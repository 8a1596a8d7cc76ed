use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::color::Color;
use crate::export::ExportFormat;
use crate::pipeline::generate::{seed_list, MAX_SEEDS};
use crate::pipeline::interpolate::BlendSpace;

/// Seed count used when no seeds are given on the command line.
pub const DEFAULT_CUSTOMIZE: usize = 4;

/// Derive a gradient palette from a few seed colors.
#[derive(Parser, Debug)]
#[command(name = "chameleon", version, about)]
pub struct Args {
    /// Seed colors as hex, e.g. '#9bce7b' or '#abc' (at most 6)
    pub seeds: Vec<Color>,

    /// Number of colors in the generated palette
    #[arg(short = 'n', long = "colors", default_value_t = 4,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub colors: u16,

    /// How many seeds to use; missing ones are filled from the stock seeds
    #[arg(short, long)]
    pub customize: Option<usize>,

    /// Snippet format to emit
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Plain)]
    pub format: ExportFormat,

    /// Color space used to blend between seeds
    #[arg(long, value_enum, default_value_t = BlendSpace::Rgb)]
    pub blend: BlendSpace,

    /// Write the snippet to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,
}

impl Args {
    /// Checks that clap does not enforce while parsing.
    pub fn validate(&self) -> Result<()> {
        if self.seeds.len() > MAX_SEEDS {
            bail!(
                "too many seed colors: got {}, at most {MAX_SEEDS} are supported",
                self.seeds.len()
            );
        }
        Ok(())
    }

    pub fn total(&self) -> usize {
        self.colors as usize
    }

    /// Seeds to generate from, after applying `--customize`.
    ///
    /// Without `--customize` every given seed is used, or the first
    /// [`DEFAULT_CUSTOMIZE`] stock seeds when none were given. The count
    /// never exceeds the palette size.
    pub fn effective_seeds(&self) -> Vec<Color> {
        let requested = self.customize.unwrap_or(if self.seeds.is_empty() {
            DEFAULT_CUSTOMIZE
        } else {
            self.seeds.len()
        });
        let customize = requested.min(MAX_SEEDS).min(self.total());
        seed_list(&self.seeds, customize)
    }
}
