/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use palettr::color::format_color;
use palettr::config::Config;
use palettr::slug::slugify;
use palettr::{
    ColorCatalog, ColorFormat, DraftController, DraftError, Palette, PaletteDraft, PaletteLibrary,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based palette builder"
)]
pub struct Cli {
    /// Maximum number of colors in a palette.
    #[arg(long, global = true)]
    pub max_colors: Option<usize>,
    /// JSON palette list to use instead of the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Display format: hex, rgb or rgba.
    #[arg(long, global = true)]
    pub format: Option<ColorFormat>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every catalog color.
    Catalog,
    /// Print the id a palette name would get.
    Slug { name: String },
    /// Build a palette from random catalog colors and print it as JSON.
    Random {
        name: String,
        #[arg(short = 'n', long = "count", default_value_t = 5)]
        count: usize,
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(max_colors) = self.max_colors {
            config.max_colors = max_colors;
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

pub fn load_catalog(config: &Config) -> Result<ColorCatalog> {
    match &config.catalog {
        Some(path) => ColorCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(ColorCatalog::builtin()),
    }
}

/// Execute a one-shot command.
pub fn run(command: Command, config: &Config, catalog: &ColorCatalog) -> Result<()> {
    match command {
        Command::Catalog => handle_catalog(catalog, config.format),
        Command::Slug { name } => println!("{}", slugify(&name)),
        Command::Random { name, count, seed } => {
            let palette = match seed {
                Some(seed) => {
                    build_random(&name, count, config, catalog, &mut StdRng::seed_from_u64(seed))?
                }
                None => build_random(&name, count, config, catalog, &mut rand::rng())?,
            };
            println!("{}", serde_json::to_string_pretty(&palette)?);
        }
    }
    Ok(())
}

fn handle_catalog(catalog: &ColorCatalog, format: ColorFormat) {
    for palette in catalog.palettes() {
        println!("{} ({})", palette.palette_name, palette.id);
        for entry in &palette.colors {
            println!("  {:<16} {}", entry.name, format_color(&entry.color, format));
        }
    }
}

/// Adds up to `count` random colors and commits them under `name`. Stops
/// early when the palette is full or the catalog runs out.
fn build_random<R: RngExt>(
    name: &str,
    count: usize,
    config: &Config,
    catalog: &ColorCatalog,
    rng: &mut R,
) -> Result<Palette> {
    let mut controller = DraftController::new(PaletteDraft::new(config.max_colors))
        .with_max_pick_attempts(config.max_pick_attempts);
    for _ in 0..count {
        match controller.add_random(catalog, rng) {
            Ok(_) => {}
            Err(err @ (DraftError::CapacityExceeded { .. } | DraftError::ExhaustedCatalog)) => {
                eprintln!("Stopped after {} colors: {err}", controller.draft().len());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    let mut library = PaletteLibrary::from_catalog(catalog);
    Ok(controller.save(name, &mut library)?)
}
