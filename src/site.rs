//! Site rendering orchestration
//!
//! Ties the catalog, theme serializer, and page template together: renders
//! one quiz to a string or writes `sites/<prefix>/index.html` for every
//! quiz in the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{CATALOG_FILE_NAME, Catalog};
use crate::debug_log;
use crate::template::PageTemplate;

/// Builds quiz sites under a site root directory.
pub struct SiteBuilder {
    root: PathBuf,
    catalog: Catalog,
    template: PageTemplate,
}

impl SiteBuilder {
    /// Load the catalog and template from the site root.
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let catalog = Catalog::load(&root.join(CATALOG_FILE_NAME))?;
        let template = PageTemplate::load(&root)?;
        Ok(Self {
            root,
            catalog,
            template,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Default output path for a quiz: `sites/<prefix>/index.html`.
    pub fn site_path(&self, prefix: &str) -> PathBuf {
        self.root.join("sites").join(prefix).join("index.html")
    }

    /// Render one quiz's page to a string.
    pub fn render(&self, prefix: &str) -> Result<String> {
        let quiz = self.catalog.get(prefix)?;
        let theme = quiz
            .theme()
            .with_context(|| format!("quiz '{prefix}'"))?;
        debug_log!("render {prefix} (theme: {})", theme.is_some());
        Ok(self.template.render(quiz, theme.as_ref()))
    }

    /// Render one quiz and write it to the given path, creating parent
    /// directories as needed.
    pub fn render_to(&self, prefix: &str, output: &Path) -> Result<()> {
        let page = self.render(prefix)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(output, page)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        Ok(())
    }

    /// Render every quiz to its default site path, in catalog order.
    /// Returns the written paths.
    pub fn render_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.catalog.len());
        for prefix in self.catalog.prefixes() {
            let path = self.site_path(prefix);
            self.render_to(prefix, &path)?;
            written.push(path);
        }
        Ok(written)
    }
}
