//! Quiz catalog loading
//!
//! Handles `quizzes.toml`: every top-level table is one quiz keyed by its
//! prefix. Table order in the file is the order quizzes are rendered and
//! deployed in, so the TOML parser is built with `preserve_order`.

use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;
use toml::Value;

use crate::theme::Theme;

/// Default catalog file name
pub const CATALOG_FILE_NAME: &str = "quizzes.toml";

/// One quiz entry: its raw configuration table.
///
/// All scalar values double as template variables, so the table is kept
/// as parsed rather than mapped onto a fixed struct.
#[derive(Debug, Clone)]
pub struct Quiz {
    table: toml::Table,
}

impl Quiz {
    /// The S3 key prefix this quiz deploys under. Required for `deploy`,
    /// unused by `render`.
    pub fn s3_path(&self) -> Result<&str> {
        match self.table.get("s3_path") {
            Some(Value::String(path)) => Ok(path),
            Some(_) => Err(anyhow!("'s3_path' must be a string")),
            None => Err(anyhow!("missing 's3_path'")),
        }
    }

    /// The quiz's theme table, if it has one.
    pub fn theme(&self) -> Result<Option<Theme>> {
        match self.table.get("theme") {
            Some(Value::Table(table)) => {
                Ok(Some(Theme::from_table(table).context("invalid theme")?))
            }
            Some(_) => Err(anyhow!("'theme' must be a table")),
            None => Ok(None),
        }
    }

    /// Scalar values usable as template variables, in file order.
    /// Tables and arrays are skipped; they have no textual substitution.
    pub fn template_vars(&self) -> impl Iterator<Item = (&str, String)> {
        self.table.iter().filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                _ => return None,
            };
            Some((key.as_str(), text))
        })
    }

    /// Direct access to the raw table (used by `list --json`).
    pub fn table(&self) -> &toml::Table {
        &self.table
    }
}

/// The full quiz catalog, in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    quizzes: Vec<(String, Quiz)>,
}

impl Catalog {
    /// Load the catalog from `quizzes.toml` at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        let mut quizzes = Vec::with_capacity(table.len());
        for (prefix, value) in table {
            let Value::Table(quiz_table) = value else {
                bail!("catalog entry '{prefix}' is not a table");
            };
            quizzes.push((prefix, Quiz { table: quiz_table }));
        }

        Ok(Self { quizzes })
    }

    /// Look up a quiz by prefix. The error lists the available prefixes.
    pub fn get(&self, prefix: &str) -> Result<&Quiz> {
        self.quizzes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, quiz)| quiz)
            .ok_or_else(|| {
                anyhow!(
                    "quiz '{prefix}' not found in {CATALOG_FILE_NAME}. Available quizzes: {}",
                    self.prefixes().collect::<Vec<_>>().join(", ")
                )
            })
    }

    /// Iterate quizzes in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quiz)> {
        self.quizzes.iter().map(|(p, q)| (p.as_str(), q))
    }

    /// Quiz prefixes in file order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.quizzes.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}
