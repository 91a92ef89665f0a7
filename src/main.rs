//! CLI entry point for the procedural banner generator

use bannergen::io::cli::{BatchGenerator, Cli};
use clap::Parser;

fn main() -> bannergen::Result<()> {
    let cli = Cli::parse();
    let generator = BatchGenerator::new(cli);
    generator.run()
}
