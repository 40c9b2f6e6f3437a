//! Render-all command implementation

use std::path::Path;

use anyhow::Result;
use quizhive::SiteBuilder;

/// Render every quiz in the catalog to its site directory.
pub fn run_render_all(root: &Path) -> Result<()> {
    let builder = SiteBuilder::from_root(root)?;

    let written = builder.render_all()?;
    for path in &written {
        eprintln!("Wrote {}", path.display());
    }
    println!("Rendered {} quiz sites", written.len());

    Ok(())
}
