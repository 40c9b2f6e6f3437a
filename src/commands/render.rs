//! Render command implementation

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quizhive::SiteBuilder;

/// Render one quiz to a file or stdout.
pub fn run_render(root: &Path, prefix: &str, output: Option<PathBuf>) -> Result<()> {
    let builder = SiteBuilder::from_root(root)?;

    match output {
        Some(path) => {
            builder.render_to(prefix, &path)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let page = builder.render(prefix)?;
            std::io::stdout()
                .write_all(page.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
