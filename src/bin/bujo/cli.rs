use std::path::PathBuf;

use bujo::PageSizeClass;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bujo", version, about = "Generate a hyperlinked bullet-journal planner PDF")]
pub struct Cli {
    /// Calendar year to generate (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Output PDF path.
    #[arg(long, default_value = "journal.pdf")]
    pub out: PathBuf,

    /// Include week and day pages.
    #[arg(long, default_value_t = false)]
    pub full: bool,

    /// Page size: standard (letter) or compact-device (paperpro).
    #[arg(long)]
    pub page: Option<PageSizeClass>,

    /// Dot-grid spacing in points.
    #[arg(long)]
    pub grid: Option<f64>,

    /// Page margin in points.
    #[arg(long)]
    pub margin: Option<f64>,

    /// Layout profile JSON; flags override its values.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Omit the collections hub and collection pages.
    #[arg(long, default_value_t = false)]
    pub no_collections: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
