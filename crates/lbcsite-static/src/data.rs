//! Data models and JSON loading for the leaderboard and press datasets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::BuildError;

/// One leaderboard row.
///
/// The field set mirrors the closed schema enforced by [`crate::schema`];
/// deserialization happens only after validation has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub name: String,
    pub logo: Vec<String>,
    pub site: String,
    pub folder: String,
    pub cost: f64,
    pub resolved_full: f64,
    pub resolved_oss: f64,
    pub date: String,
    pub logs: String,
    pub trajs: String,
    pub checked: bool,
    pub tags: Vec<String>,
    /// Cautionary note. `null` in the input means "no warning".
    pub warning: Option<String>,
}

/// A named leaderboard with its presentation-ordered results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub name: String,
    pub results: Vec<Entry>,
}

/// A press mention. Only `date` is required; everything else is passed
/// through to the templates untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressItem {
    pub date: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Read and parse a JSON document. A missing file or a syntax error is a
/// load error, distinct from schema validation failure.
pub fn load_value(path: &Path) -> Result<Value, BuildError> {
    let content = fs::read_to_string(path).map_err(|e| BuildError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| BuildError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Unwrap the validated root value into the canonical leaderboard sequence.
///
/// The dataset may arrive either as a bare array or wrapped in an object
/// under `leaderboards`; downstream code only ever sees the unwrapped form.
pub fn normalize_leaderboards(root: Value) -> Result<Vec<Leaderboard>, BuildError> {
    let inner = match root {
        Value::Object(mut map) => map
            .remove("leaderboards")
            .unwrap_or(Value::Array(Vec::new())),
        other => other,
    };

    serde_json::from_value(inner).map_err(|e| BuildError::Load {
        path: "leaderboards".to_string(),
        message: e.to_string(),
    })
}

/// Load the press dataset and sort it newest-first by its `date` string.
/// Items with equal dates keep their input order.
pub fn load_press(path: &Path) -> Result<Vec<PressItem>, BuildError> {
    let value = load_value(path)?;

    let mut items: Vec<PressItem> =
        serde_json::from_value(value).map_err(|e| BuildError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    items.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(items)
}
