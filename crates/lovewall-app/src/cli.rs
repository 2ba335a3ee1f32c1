use std::path::PathBuf;

use clap::Parser;

/// LoveWall: a shared wall of notes, photos and voice messages for two.
#[derive(Parser, Debug)]
#[command(name = "lovewall", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, lovewall=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for item placement, for a reproducible wall.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Member id used by `join`.
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Never call the generation API.
    #[arg(long)]
    pub offline: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
