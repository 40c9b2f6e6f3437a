//! Status command implementation

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use quizhive::Catalog;
use quizhive::config::CATALOG_FILE_NAME;
use quizhive::deploy::AwsCliStore;
use quizhive::template::TEMPLATE_PATH;

/// Run the status command
pub fn run_status(root: &Path) -> Result<()> {
    println!("quizhive Environment Status\n");

    print!("📋 Catalog ({CATALOG_FILE_NAME}): ");
    io::stdout().flush().ok();
    let catalog_path = root.join(CATALOG_FILE_NAME);
    if catalog_path.exists() {
        match Catalog::load(&catalog_path) {
            Ok(catalog) => println!("✅ Found ({} quizzes)", catalog.len()),
            Err(e) => println!("❌ Invalid: {e}"),
        }
    } else {
        println!("❌ Missing");
    }

    print!("📄 Page template: ");
    io::stdout().flush().ok();
    if root.join(TEMPLATE_PATH).exists() {
        println!("✅ Found ({TEMPLATE_PATH})");
    } else {
        println!("⚠️  Missing (built-in template will be used)");
    }

    print!("📁 sites/ directory: ");
    io::stdout().flush().ok();
    if root.join("sites").is_dir() {
        println!("✅ Exists");
    } else {
        println!("⚠️  Missing (run 'quizhive render-all')");
    }

    print!("📁 shared/ directory: ");
    io::stdout().flush().ok();
    if root.join("shared").is_dir() {
        println!("✅ Exists");
    } else {
        println!("⚠️  Missing (no shared assets will deploy)");
    }

    print!("☁️  AWS CLI: ");
    io::stdout().flush().ok();
    if AwsCliStore::available() {
        println!("✅ Available");
    } else {
        println!("❌ Not found");
        println!("   Install the AWS CLI and run 'aws configure' to enable deploys.");
    }

    Ok(())
}
