//! CLI entry point for the tessellation pattern generator

use clap::Parser;
use eschertile::io::cli::{Cli, PatternGenerator};

fn main() -> eschertile::Result<()> {
    let cli = Cli::parse();
    let mut generator = PatternGenerator::new(cli);
    generator.process()
}
