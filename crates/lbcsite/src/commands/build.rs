//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use lbcsite_static::{BuildConfig, SiteBuilder};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_output")]
    output: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
        }
    }
}

fn default_title() -> String {
    "LBC-bench".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}

/// Load configuration from site.toml in the project root if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(root: &Path) -> Result<ConfigFile> {
    let config_path = root.join("site.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read site.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse site.toml: {}", e))?;
        tracing::info!("Loaded config from site.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(root: PathBuf, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(&root)?;

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| root.join(&file_config.site.output)),
        title: file_config.site.title,
        root,
    };

    let report = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages in {}ms",
        report.pages,
        report.duration_ms
    );

    tracing::info!("Output: {}", report.output_dir.display());

    Ok(())
}
