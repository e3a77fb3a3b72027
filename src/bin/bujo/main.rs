use anyhow::Context as _;
use bujo::{Layout, PlannerConfig, build_planner};
use chrono::Datelike;
use clap::Parser;

mod cli;
mod logging;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let layout = layout_from(&cli)?;
    let cfg = PlannerConfig::new(year, &cli.out, layout)?;
    build_planner(&cfg).with_context(|| format!("build planner '{}'", cli.out.display()))?;

    println!("Wrote {} for {}", cli.out.display(), year);
    Ok(())
}

fn layout_from(cli: &Cli) -> anyhow::Result<Layout> {
    let mut layout = match &cli.profile {
        Some(path) => Layout::from_json_path(path)
            .with_context(|| format!("load profile '{}'", path.display()))?,
        None => Layout::default(),
    };
    if cli.full {
        layout = layout.with_full(true);
    }
    if let Some(page) = cli.page {
        layout.page_size = page;
    }
    if let Some(grid) = cli.grid {
        layout.grid_spacing = grid;
    }
    if let Some(margin) = cli.margin {
        layout.margin = margin;
    }
    if cli.no_collections {
        layout.show_collections = false;
    }
    Ok(layout)
}
