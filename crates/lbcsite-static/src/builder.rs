//! Site build pipeline: load, validate, aggregate, assemble, render.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assets;
use crate::data;
use crate::schema::{self, SchemaError};
use crate::tags;
use crate::templates::{RenderContext, TemplateEngine};

/// Leaderboard dataset, relative to the project root.
pub const LEADERBOARDS_PATH: &str = "data/leaderboards.json";

/// Press dataset, relative to the project root.
pub const PRESS_PATH: &str = "data/press.json";

/// Page templates directory, relative to the project root. Scanned
/// non-recursively for `.html` files.
pub const PAGES_DIR: &str = "templates/pages";

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root containing data, templates, and static assets.
    pub root: PathBuf,

    /// Output directory, recreated from scratch on every build.
    pub output_dir: PathBuf,

    /// Site title passed to every template.
    pub title: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("dist"),
            title: "LBC-bench".to_string(),
        }
    }
}

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of pages written.
    pub pages: usize,

    /// Total build time in milliseconds.
    pub duration_ms: u64,

    /// Output directory.
    pub output_dir: PathBuf,
}

/// Result of a data check (load + validate, no output).
#[derive(Debug)]
pub struct CheckReport {
    /// Number of leaderboards in the dataset.
    pub leaderboards: usize,

    /// Number of press items.
    pub press_items: usize,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("Invalid leaderboards data: {0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Config(String),

    #[error("Failed to render template {name}: {message}")]
    Template { name: String, message: String },

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// A discovered page template and its output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Page {
    /// Template name relative to the templates directory.
    template: String,

    /// Output filename, equal to the template's own filename.
    output: String,
}

/// Site builder running the full pipeline once, sequentially.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder for the configured project root.
    pub fn new(config: BuildConfig) -> Self {
        let templates = TemplateEngine::from_dir(&config.root.join("templates"));
        Self { config, templates }
    }

    /// Build the site: validate the data, reset the output directory, copy
    /// static assets, and render every page template.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let root = &self.config.root;

        let raw = data::load_value(&root.join(LEADERBOARDS_PATH))?;
        schema::validate(&raw)?;
        tracing::info!("leaderboards.json format is valid");

        let leaderboards = data::normalize_leaderboards(raw)?;
        let press = data::load_press(&root.join(PRESS_PATH))?;
        let summary = tags::collect_tags(&leaderboards);

        let pages = self.discover_pages()?;

        // Output must be reset before any page is written.
        assets::assemble(root, &self.config.output_dir)?;

        let ctx = RenderContext {
            title: self.config.title.clone(),
            leaderboards,
            press,
            all_tags: summary.all_tags,
            leaderboard_tags: summary.leaderboard_tags,
        };

        for page in &pages {
            let html = self
                .templates
                .render(&page.template, &ctx)
                .map_err(|e| BuildError::Template {
                    name: page.template.clone(),
                    message: e.to_string(),
                })?;

            fs::write(self.config.output_dir.join(&page.output), html)
                .map_err(|e| BuildError::Write(e.to_string()))?;

            tracing::info!("built {}", page.output);
        }

        Ok(BuildReport {
            pages: pages.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover page templates directly under `templates/pages`.
    fn discover_pages(&self) -> Result<Vec<Page>, BuildError> {
        let pages_dir = self.config.root.join(PAGES_DIR);
        if !pages_dir.is_dir() {
            return Err(BuildError::Config(format!(
                "pages directory not found: {}",
                pages_dir.display()
            )));
        }

        let mut pages = Vec::new();
        let entries =
            fs::read_dir(&pages_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        for entry in entries {
            let entry = entry.map_err(|e| BuildError::Write(e.to_string()))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            pages.push(Page {
                template: format!("pages/{}", file_name),
                output: file_name.to_string(),
            });
        }

        // Directory iteration order is platform-dependent.
        pages.sort_by(|a, b| a.output.cmp(&b.output));

        Ok(pages)
    }
}

/// Load and validate both datasets without touching the output directory.
pub fn check(root: &Path) -> Result<CheckReport, BuildError> {
    let raw = data::load_value(&root.join(LEADERBOARDS_PATH))?;
    schema::validate(&raw)?;

    let leaderboards = data::normalize_leaderboards(raw)?;
    let press = data::load_press(&root.join(PRESS_PATH))?;

    Ok(CheckReport {
        leaderboards: leaderboards.len(),
        press_items: press.len(),
    })
}
