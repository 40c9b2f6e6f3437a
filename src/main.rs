mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    quizhive::debug::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { prefix, output } => commands::run_render(&cli.root, &prefix, output),
        Commands::RenderAll => commands::run_render_all(&cli.root),
        Commands::List { json } => commands::run_list(&cli.root, json),
        Commands::Deploy {
            dry_run,
            site_bucket,
            assets_bucket,
        } => commands::run_deploy(&cli.root, dry_run, &site_bucket, &assets_bucket),
        Commands::Status => commands::run_status(&cli.root),
    }
}
