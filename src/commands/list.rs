//! List command implementation

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use quizhive::Catalog;
use quizhive::config::CATALOG_FILE_NAME;

/// One catalog row in `list --json` output.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    prefix: &'a str,
    title: Option<&'a str>,
    s3_path: Option<&'a str>,
    has_theme: bool,
}

/// List quizzes in catalog order.
pub fn run_list(root: &Path, json: bool) -> Result<()> {
    let catalog = Catalog::load(&root.join(CATALOG_FILE_NAME))?;

    if json {
        let entries: Vec<ListEntry> = catalog
            .iter()
            .map(|(prefix, quiz)| ListEntry {
                prefix,
                title: quiz.table().get("title").and_then(|v| v.as_str()),
                s3_path: quiz.s3_path().ok(),
                has_theme: quiz.table().contains_key("theme"),
            })
            .collect();
        let out = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize catalog")?;
        println!("{out}");
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No quizzes in {CATALOG_FILE_NAME}.");
        return Ok(());
    }

    for (prefix, quiz) in catalog.iter() {
        let title = quiz
            .table()
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(untitled)");
        let themed = if quiz.table().contains_key("theme") {
            " [themed]"
        } else {
            ""
        };
        println!("{prefix:<20} {title}{themed}");
    }
    println!("\nTotal: {} quizzes", catalog.len());

    Ok(())
}
