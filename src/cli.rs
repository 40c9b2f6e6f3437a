//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use quizhive::deploy::{DEFAULT_ASSETS_BUCKET, DEFAULT_SITE_BUCKET};

#[derive(Parser)]
#[command(name = "quizhive")]
#[command(author, version, about = "Static quiz site builder - renders quiz sites and deploys them to S3")]
pub struct Cli {
    /// Site root directory containing quizzes.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single quiz site's index.html
    Render {
        /// Quiz prefix (e.g. greek-myth)
        prefix: String,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render every quiz to sites/<prefix>/index.html
    RenderAll,
    /// List quizzes in the catalog
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upload rendered sites, the home page, and shared assets to S3
    Deploy {
        /// Print the upload plan without uploading
        #[arg(long)]
        dry_run: bool,
        /// Bucket for quiz sites and the home page
        #[arg(long, default_value = DEFAULT_SITE_BUCKET)]
        site_bucket: String,
        /// Bucket for shared assets
        #[arg(long, default_value = DEFAULT_ASSETS_BUCKET)]
        assets_bucket: String,
    },
    /// Check environment setup status
    Status,
}
