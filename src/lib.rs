//! quizhive - static quiz site builder
//!
//! Renders static quiz websites from a shared `quizzes.toml` configuration
//! and a single page template, then deploys the assets to S3.
//!
//! # Modules
//!
//! - [`config`] - Quiz catalog loading (`quizzes.toml`)
//! - [`theme`] - Theme model and JavaScript serialization
//! - [`template`] - Page template placeholder substitution
//! - [`site`] - Site rendering orchestration
//! - [`deploy`] - S3 upload planning and execution

pub mod config;
pub mod debug;
pub mod deploy;
pub mod site;
pub mod template;
pub mod theme;

// Re-export commonly used types
pub use config::{Catalog, Quiz};
pub use deploy::{AwsCliStore, Deployer, ObjectStore, Upload};
pub use site::SiteBuilder;
pub use template::PageTemplate;
pub use theme::{Rank, Theme, ThemeValue};
