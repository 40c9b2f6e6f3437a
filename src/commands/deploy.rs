//! Deploy command implementation

use std::path::Path;

use anyhow::{Result, bail};

use quizhive::config::CATALOG_FILE_NAME;
use quizhive::deploy::AwsCliStore;
use quizhive::{Catalog, Deployer};

/// Upload rendered sites, the home page, and shared assets.
pub fn run_deploy(root: &Path, dry_run: bool, site_bucket: &str, assets_bucket: &str) -> Result<()> {
    let catalog = Catalog::load(&root.join(CATALOG_FILE_NAME))?;
    let deployer = Deployer::new(root, site_bucket, assets_bucket);
    let plan = deployer.plan(&catalog)?;

    if plan.is_empty() {
        println!("Nothing to deploy. Run 'quizhive render-all' first.");
        return Ok(());
    }

    if dry_run {
        println!("Deploy plan ({} files, dry run):", plan.len());
        for upload in &plan {
            println!(
                "  {} → {} ({})",
                upload.local.display(),
                upload.url,
                upload.content_type
            );
        }
        return Ok(());
    }

    if !AwsCliStore::available() {
        bail!("aws CLI not found. Install it and run 'aws configure' first.");
    }

    println!("Deploying {} files to s3://{site_bucket}/", plan.len());
    deployer.execute(&plan)?;
    println!("\nDone!");

    Ok(())
}
