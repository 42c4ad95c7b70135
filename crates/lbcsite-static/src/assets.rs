//! Output directory assembly: reset, static asset copies, CNAME.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Static asset directories copied verbatim when present.
const ASSET_DIRS: &[&str] = &["css", "img", "js"];

/// Single-file icon, optional.
const ICON_FILE: &str = "favicon.ico";

/// Domain-mapping file required for deployment.
const DOMAIN_FILE: &str = "CNAME";

/// Reset the output directory and populate it with static assets.
///
/// The previous output directory is removed entirely so nothing stale
/// survives. Asset directories and the icon are each optional; the CNAME
/// file is mandatory and its absence fails the build.
pub fn assemble(root: &Path, output: &Path) -> Result<(), BuildError> {
    if output.exists() {
        fs::remove_dir_all(output).map_err(|e| BuildError::Write(e.to_string()))?;
    }
    fs::create_dir_all(output).map_err(|e| BuildError::Write(e.to_string()))?;

    for dir in ASSET_DIRS {
        let source = root.join(dir);
        if source.is_dir() {
            copy_dir(&source, &output.join(dir))?;
            tracing::debug!("copied {}/", dir);
        }
    }

    let icon = root.join(ICON_FILE);
    if icon.is_file() {
        fs::copy(&icon, output.join(ICON_FILE))
            .map_err(|e| BuildError::Write(e.to_string()))?;
    }

    let domain = root.join(DOMAIN_FILE);
    if !domain.is_file() {
        return Err(BuildError::Config(format!(
            "{} file not found in {}; create one with the site's domain",
            DOMAIN_FILE,
            root.display()
        )));
    }
    fs::copy(&domain, output.join(DOMAIN_FILE))
        .map_err(|e| BuildError::Write(e.to_string()))?;

    Ok(())
}

/// Copy a directory recursively, preserving its relative structure.
fn copy_dir(source: &Path, dest: &Path) -> Result<(), BuildError> {
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| BuildError::Write(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| BuildError::Write(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BuildError::Write(e.to_string()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| BuildError::Write(e.to_string()))?;
        }
    }
    Ok(())
}
