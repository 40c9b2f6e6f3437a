//! Page template module
//!
//! Renders a quiz site's `index.html` by substituting `{{name}}`
//! placeholders in the shared page template.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Quiz;
use crate::theme::Theme;

/// Template file path relative to the site root.
pub const TEMPLATE_PATH: &str = "templates/index.html.tmpl";

/// Built-in template variables, overridden by per-quiz values.
const DEFAULTS: &[(&str, &str)] = &[
    (
        "google_fonts",
        "Cinzel:wght@400;700;900&family=Spectral:ital,wght@0,400;1,400",
    ),
    ("theme_css_comment", "Custom Theme Override"),
    ("login_heading", "Welcome!"),
    ("username_label", "Enter your name:"),
    ("username_placeholder", "Your name..."),
    ("start_button", "Start Quiz"),
    ("logout_button", "Change User"),
    ("play_again", "Play Again"),
];

/// The shared quiz page template.
///
/// Substitution is plain string replacement: each `{{name}}` is replaced by
/// its bound value. Placeholders with no binding are left untouched so
/// template typos stay visible in the output.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    /// Create a template from a template string.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Load the template from `templates/index.html.tmpl` under the site
    /// root, falling back to the built-in copy when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(TEMPLATE_PATH);
        if path.exists() {
            let template = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            Ok(Self::new(&template))
        } else {
            Ok(Self::new(include_str!("../templates/index.html.tmpl")))
        }
    }

    /// Render the page for one quiz.
    ///
    /// Binding order: built-in defaults first, then the quiz's scalar
    /// values, then `{{theme_js}}` from the serialized theme (`{}` when
    /// the quiz has no theme, keeping the generated script valid).
    pub fn render(&self, quiz: &Quiz, theme: Option<&Theme>) -> String {
        let mut result = self.template.clone();

        for (key, value) in DEFAULTS {
            if quiz.table().contains_key(*key) {
                continue;
            }
            result = result.replace(&placeholder(key), value);
        }

        for (key, value) in quiz.template_vars() {
            result = result.replace(&placeholder(key), &value);
        }

        let theme_js = theme.map(Theme::to_js).unwrap_or_else(|| "{}".to_string());
        result.replace(&placeholder("theme_js"), &theme_js)
    }

    /// Get the raw template string.
    pub fn template_string(&self) -> &str {
        &self.template
    }
}

fn placeholder(key: &str) -> String {
    format!("{{{{{key}}}}}")
}
