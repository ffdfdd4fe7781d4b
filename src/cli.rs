use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "roster",
    about = concat!("roster v", env!("CARGO_PKG_VERSION"), " - an ordered list of names in your terminal"),
    version
)]
pub struct Cli {
    /// Names to seed the roster with (in order)
    pub names: Vec<String>,

    /// Path to a roster.toml config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}
