//! Command-line interface for batch pattern generation
//!
//! Enumerates every side pairing for the requested polygon, realizes each
//! valid one as a bounded tiling, and exports a PNG preview plus a JSON
//! record per pattern.

use crate::algorithm::combinations::{add_mirror_combinations, find_combinations};
use crate::algorithm::walk::make_pattern;
use crate::io::configuration::{
    DEFAULT_IMAGE_SIZE, DEFAULT_MAX_DISTANCE, DEFAULT_RADIUS, DEFAULT_SEED, DrawConfig,
    OUTPUT_STEM,
};
use crate::io::error::{EscherError, Result};
use crate::io::persist::save_pattern;
use crate::io::progress::ProgressManager;
use crate::io::render::export_pattern_png;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eschertile")]
#[command(
    author,
    version,
    about = "Generate Escher-style tessellation patterns from side pairings"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of polygon sides (3 to 8)
    #[arg(value_name = "SIDES")]
    pub sides: usize,

    /// Circumradius of the base polygon
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Tiling walk cutoff, in multiples of the tile side height
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: f64,

    /// Include mirror-pairing variants (exponentially more combinations)
    #[arg(short, long)]
    pub mirror: bool,

    /// Smooth side outlines with cubic splines before rendering
    #[arg(long)]
    pub smooth: bool,

    /// Skip tile borders in the rendered images
    #[arg(long)]
    pub no_border: bool,

    /// Project the pattern onto a bounded disc, sphere-like
    #[arg(long)]
    pub spherical: bool,

    /// Output directory for PNG and JSON files
    #[arg(short, long, default_value = "patterns")]
    pub output: PathBuf,

    /// Random seed for the tile color palette
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge length of exported images in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub image_size: u32,

    /// Stop after this many valid patterns
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Drawing options implied by the flags
    pub fn draw_config(&self) -> DrawConfig {
        DrawConfig {
            image_size: self.image_size,
            smooth_curves: self.smooth,
            draw_border: !self.no_border,
            spherical: self.spherical,
            seed: self.seed,
            view_extent: self.max_distance + 1.0,
            ..DrawConfig::default()
        }
    }
}

/// Orchestrates one batch generation run
pub struct PatternGenerator {
    cli: Cli,
    progress: ProgressManager,
}

impl PatternGenerator {
    /// Create a generator from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.quiet);
        Self { cli, progress }
    }

    /// Enumerate, tile, and export patterns according to the arguments
    ///
    /// Contradictory combinations are counted and skipped; every other
    /// failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid parameters or export failures.
    pub fn process(&mut self) -> Result<()> {
        let mut combinations = find_combinations(self.cli.sides)?;
        if self.cli.mirror {
            combinations = add_mirror_combinations(combinations);
        }

        std::fs::create_dir_all(&self.cli.output).map_err(|source| EscherError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create output directory",
            source,
        })?;

        let draw_config = self.cli.draw_config();
        let limit = self.cli.limit.unwrap_or(usize::MAX);
        let mut valid = 0_usize;
        let mut skipped = 0_usize;

        self.progress.start(combinations.len());
        for combination in &combinations {
            if valid >= limit {
                break;
            }
            match make_pattern(combination, self.cli.radius, self.cli.max_distance) {
                Ok(pattern) => {
                    let stem = file_stem(combination.entries());
                    export_pattern_png(
                        &pattern,
                        &draw_config,
                        &self.cli.output.join(format!("{stem}.png")),
                    )?;
                    save_pattern(
                        &pattern,
                        self.cli.radius,
                        &self.cli.output.join(format!("{stem}.json")),
                    )?;
                    valid += 1;
                    self.progress.advance(format!("{combination} ok"));
                }
                Err(EscherError::InvalidCombination { .. }) => {
                    skipped += 1;
                    self.progress.advance(format!("{combination} invalid"));
                }
                Err(other) => return Err(other),
            }
        }

        self.progress
            .finish(format!("{valid} patterns, {skipped} invalid combinations"));
        Ok(())
    }
}

/// File stem encoding the combination entries, e.g. `pattern_1_0_-3_-4`
fn file_stem(entries: &[i32]) -> String {
    let joined: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("{OUTPUT_STEM}_{}", joined.join("_"))
}
