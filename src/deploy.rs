//! S3 deployment
//!
//! Builds the upload plan for rendered sites, the home page, and shared
//! assets, then copies each file with `aws s3 cp`. The actual copy goes
//! through the [`ObjectStore`] trait so tests can mock it.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::config::Catalog;
use crate::debug_log;

#[cfg(test)]
use mockall::automock;

/// Bucket for rendered quiz sites and the home page.
pub const DEFAULT_SITE_BUCKET: &str = "quizhive.org";

/// Bucket for shared assets (css, js, question databases).
pub const DEFAULT_ASSETS_BUCKET: &str = "assets.quizhive.org";

/// Cache policy applied to every upload.
const CACHE_CONTROL: &str = "max-age=300, s-maxage=60";

/// Extensions that deploy from `shared/`, with their Content-Type.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("db", "application/octet-stream"),
];

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Site files uploaded for each quiz.
const SITE_FILES: &[&str] = &["index.html", "theme.css"];

/// Content-Type for a local file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str());
    CONTENT_TYPES
        .iter()
        .find(|(e, _)| Some(*e) == ext)
        .map(|(_, ct)| *ct)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Whether a shared asset has a deployable extension.
fn is_deployable(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str());
    CONTENT_TYPES.iter().any(|(e, _)| Some(*e) == ext)
}

/// One planned upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    /// Local file to copy
    pub local: PathBuf,

    /// Destination `s3://bucket/key` URL
    pub url: String,

    /// Content-Type header for the object
    pub content_type: &'static str,

    /// Cache-Control header for the object
    pub cache_control: &'static str,
}

impl Upload {
    fn new(local: PathBuf, url: String) -> Self {
        let content_type = content_type(&local);
        Self {
            local,
            url,
            content_type,
            cache_control: CACHE_CONTROL,
        }
    }
}

/// Trait for object storage copies (allows mocking)
#[cfg_attr(test, automock)]
pub trait ObjectStore {
    /// Copy one local file to its destination URL.
    fn copy(&self, upload: &Upload) -> Result<()>;
}

/// Real store that shells out to the AWS CLI.
#[derive(Default)]
pub struct AwsCliStore;

impl AwsCliStore {
    /// Whether the `aws` CLI is available on PATH.
    pub fn available() -> bool {
        Command::new("aws")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl ObjectStore for AwsCliStore {
    fn copy(&self, upload: &Upload) -> Result<()> {
        let output = Command::new("aws")
            .args(["s3", "cp"])
            .arg(&upload.local)
            .arg(&upload.url)
            .args(["--content-type", upload.content_type])
            .args(["--cache-control", upload.cache_control])
            .output()
            .context("Failed to execute aws s3 cp")?;

        if !output.status.success() {
            bail!(
                "aws s3 cp failed for {}: {}",
                upload.local.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }
}

/// Deploys rendered sites and assets from a site root.
pub struct Deployer<S: ObjectStore = AwsCliStore> {
    root: PathBuf,
    site_bucket: String,
    assets_bucket: String,
    store: S,
}

impl Deployer<AwsCliStore> {
    pub fn new(root: impl Into<PathBuf>, site_bucket: &str, assets_bucket: &str) -> Self {
        Self::with_store(root, site_bucket, assets_bucket, AwsCliStore)
    }
}

impl<S: ObjectStore> Deployer<S> {
    /// Create a deployer with a custom store (for testing).
    pub fn with_store(
        root: impl Into<PathBuf>,
        site_bucket: &str,
        assets_bucket: &str,
        store: S,
    ) -> Self {
        Self {
            root: root.into(),
            site_bucket: site_bucket.to_string(),
            assets_bucket: assets_bucket.to_string(),
            store,
        }
    }

    /// Build the upload plan: quiz sites in catalog order, then the home
    /// page, then shared assets sorted by name. Files that do not exist
    /// locally are skipped.
    pub fn plan(&self, catalog: &Catalog) -> Result<Vec<Upload>> {
        let mut uploads = Vec::new();

        for (prefix, quiz) in catalog.iter() {
            let s3_path = quiz
                .s3_path()
                .with_context(|| format!("quiz '{prefix}'"))?;
            let site_dir = self.root.join("sites").join(prefix);
            for name in SITE_FILES {
                let local = site_dir.join(name);
                if local.exists() {
                    let url = format!("s3://{}/{s3_path}/{name}", self.site_bucket);
                    uploads.push(Upload::new(local, url));
                }
            }
        }

        let home = self.root.join("home").join("index.html");
        if home.exists() {
            let url = format!("s3://{}/index.html", self.site_bucket);
            uploads.push(Upload::new(home, url));
        }

        let shared_dir = self.root.join("shared");
        if shared_dir.is_dir() {
            let mut entries: Vec<PathBuf> = shared_dir
                .read_dir()
                .with_context(|| format!("Failed to read {}", shared_dir.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && is_deployable(p))
                .collect();
            entries.sort();

            for path in entries {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .context("shared asset has a non-UTF-8 name")?
                    .to_string();
                let url = format!("s3://{}/{name}", self.assets_bucket);
                uploads.push(Upload::new(path, url));
            }
        }

        Ok(uploads)
    }

    /// Execute a plan in order, printing each copy. The first failure
    /// aborts the deploy.
    pub fn execute(&self, plan: &[Upload]) -> Result<()> {
        for upload in plan {
            println!("  {} → {}", upload.local.display(), upload.url);
            debug_log!("upload {} -> {}", upload.local.display(), upload.url);
            self.store.copy(upload)?;
        }
        Ok(())
    }
}
