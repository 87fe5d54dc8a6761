//! CLI entry point for the template-tiled level generator

use clap::Parser;
use sokotile::io::cli::{Cli, LevelBatch};

fn main() -> sokotile::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut batch = LevelBatch::new(cli);
    batch.run()?;
    Ok(())
}
