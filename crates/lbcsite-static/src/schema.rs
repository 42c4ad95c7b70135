//! Structural validation for the leaderboards dataset.
//!
//! The dataset is a closed schema: every object level rejects unknown keys,
//! every required key must be present with the right primitive type. The
//! first violation found wins and is reported with its path from the
//! document root.

use std::fmt;

use serde_json::Value;

/// One step along a path into the JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object field name.
    Field(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// A schema violation, located by its path from the document root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (at {})", display_path(.path))]
pub struct SchemaError {
    /// Path from the document root to the offending value.
    pub path: Vec<PathSegment>,
    /// Human-readable description of the violation.
    pub message: String,
}

fn display_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn fail(path: Vec<PathSegment>, message: impl Into<String>) -> Result<(), SchemaError> {
    Err(SchemaError {
        path,
        message: message.into(),
    })
}

/// Expected type of an entry field.
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Str,
    Num,
    Bool,
    StrArray,
    NullableStr,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Num => "number",
            FieldKind::Bool => "boolean",
            FieldKind::StrArray => "array of strings",
            FieldKind::NullableStr => "string or null",
        }
    }
}

/// Every key an entry must carry, and its type. No other keys are allowed.
const ENTRY_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::Str),
    ("logo", FieldKind::StrArray),
    ("site", FieldKind::Str),
    ("folder", FieldKind::Str),
    ("cost", FieldKind::Num),
    ("resolved_full", FieldKind::Num),
    ("resolved_oss", FieldKind::Num),
    ("date", FieldKind::Str),
    ("logs", FieldKind::Str),
    ("trajs", FieldKind::Str),
    ("checked", FieldKind::Bool),
    ("tags", FieldKind::StrArray),
    ("warning", FieldKind::NullableStr),
];

/// Validate the parsed root value of `leaderboards.json`.
///
/// The root may be either an object with a single `leaderboards` key or a
/// bare array of leaderboards; both shapes are accepted.
pub fn validate(root: &Value) -> Result<(), SchemaError> {
    match root {
        Value::Array(items) => validate_leaderboards(items, &[]),
        Value::Object(map) => {
            for key in map.keys() {
                if key != "leaderboards" {
                    return fail(vec![], format!("unexpected field '{}'", key));
                }
            }
            let Some(inner) = map.get("leaderboards") else {
                return fail(vec![], "missing required field 'leaderboards'");
            };
            let prefix = vec![PathSegment::Field("leaderboards".to_string())];
            let Value::Array(items) = inner else {
                return fail(prefix, "expected an array of leaderboards");
            };
            validate_leaderboards(items, &prefix)
        }
        _ => fail(vec![], "expected an object or an array at the root"),
    }
}

fn validate_leaderboards(items: &[Value], prefix: &[PathSegment]) -> Result<(), SchemaError> {
    for (i, item) in items.iter().enumerate() {
        let mut path = prefix.to_vec();
        path.push(PathSegment::Index(i));
        validate_leaderboard(item, path)?;
    }
    Ok(())
}

fn validate_leaderboard(value: &Value, path: Vec<PathSegment>) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return fail(path, "expected a leaderboard object");
    };

    for key in map.keys() {
        if key != "name" && key != "results" {
            return fail(path, format!("unexpected field '{}'", key));
        }
    }

    match map.get("name") {
        Some(Value::String(_)) => {}
        Some(_) => {
            let mut p = path.clone();
            p.push(PathSegment::Field("name".to_string()));
            return fail(p, "expected a string");
        }
        None => return fail(path, "missing required field 'name'"),
    }

    let results = match map.get("results") {
        Some(Value::Array(results)) => results,
        Some(_) => {
            let mut p = path.clone();
            p.push(PathSegment::Field("results".to_string()));
            return fail(p, "expected an array of entries");
        }
        None => return fail(path, "missing required field 'results'"),
    };

    for (i, entry) in results.iter().enumerate() {
        let mut p = path.clone();
        p.push(PathSegment::Field("results".to_string()));
        p.push(PathSegment::Index(i));
        validate_entry(entry, p)?;
    }

    Ok(())
}

fn validate_entry(value: &Value, path: Vec<PathSegment>) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return fail(path, "expected an entry object");
    };

    for key in map.keys() {
        if !ENTRY_FIELDS.iter().any(|(name, _)| name == key) {
            return fail(path, format!("unexpected field '{}'", key));
        }
    }

    for (name, kind) in ENTRY_FIELDS {
        let Some(field) = map.get(*name) else {
            return fail(path, format!("missing required field '{}'", name));
        };
        if !matches_kind(field, *kind) {
            let mut p = path.clone();
            p.push(PathSegment::Field(name.to_string()));
            return fail(p, format!("expected {}", kind.name()));
        }
        if let FieldKind::StrArray = kind {
            if let Value::Array(items) = field {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        let mut p = path.clone();
                        p.push(PathSegment::Field(name.to_string()));
                        p.push(PathSegment::Index(i));
                        return fail(p, "expected a string");
                    }
                }
            }
        }
    }

    Ok(())
}

fn matches_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Str => value.is_string(),
        FieldKind::Num => value.is_number(),
        FieldKind::Bool => value.is_boolean(),
        FieldKind::StrArray => value.is_array(),
        FieldKind::NullableStr => value.is_string() || value.is_null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> Value {
        json!({
            "name": "agent-x",
            "logo": ["img/agent-x.svg"],
            "site": "https://example.com",
            "folder": "agent-x",
            "cost": 1.25,
            "resolved_full": 43.2,
            "resolved_oss": 41.0,
            "date": "2024-06-01",
            "logs": "logs/agent-x",
            "trajs": "trajs/agent-x",
            "checked": true,
            "tags": ["open-source"],
            "warning": null
        })
    }

    #[test]
    fn accepts_valid_wrapped_dataset() {
        let data = json!({
            "leaderboards": [{"name": "lite", "results": [entry()]}]
        });

        assert!(validate(&data).is_ok());
    }

    #[test]
    fn accepts_bare_array_root() {
        let data = json!([{"name": "lite", "results": [entry()]}]);

        assert!(validate(&data).is_ok());
    }

    #[test]
    fn accepts_string_warning() {
        let mut e = entry();
        e["warning"] = json!("results under review");
        let data = json!({"leaderboards": [{"name": "lite", "results": [e]}]});

        assert!(validate(&data).is_ok());
    }

    #[test]
    fn rejects_non_object_root() {
        let err = validate(&json!(42)).unwrap_err();
        assert!(err.message.contains("object or an array"));
        assert!(err.path.is_empty());
    }

    #[test]
    fn rejects_unexpected_top_level_field() {
        let data = json!({"leaderboards": [], "extra": 1});
        let err = validate(&data).unwrap_err();
        assert!(err.message.contains("extra"));
    }

    #[test]
    fn rejects_missing_entry_field() {
        let mut e = entry();
        e.as_object_mut().unwrap().remove("cost");
        let data = json!({"leaderboards": [{"name": "lite", "results": [e]}]});

        let err = validate(&data).unwrap_err();
        assert!(err.message.contains("cost"));
        assert_eq!(
            err.path,
            vec![
                PathSegment::Field("leaderboards".to_string()),
                PathSegment::Index(0),
                PathSegment::Field("results".to_string()),
                PathSegment::Index(0),
            ]
        );
    }

    #[test]
    fn rejects_undeclared_entry_field() {
        let mut e = entry();
        e["rank"] = json!(1);
        let data = json!({"leaderboards": [{"name": "lite", "results": [e]}]});

        let err = validate(&data).unwrap_err();
        assert!(err.message.contains("rank"));
    }

    #[test]
    fn rejects_wrong_primitive_type() {
        let mut e = entry();
        e["checked"] = json!("yes");
        let data = json!({"leaderboards": [{"name": "lite", "results": [e]}]});

        let err = validate(&data).unwrap_err();
        assert!(err.message.contains("boolean"));
        assert_eq!(
            err.path.last(),
            Some(&PathSegment::Field("checked".to_string()))
        );
    }

    #[test]
    fn rejects_non_string_tag() {
        let mut e = entry();
        e["tags"] = json!(["ok", 7]);
        let data = json!({"leaderboards": [{"name": "lite", "results": [e]}]});

        let err = validate(&data).unwrap_err();
        assert_eq!(err.path.last(), Some(&PathSegment::Index(1)));
    }

    #[test]
    fn error_display_includes_path() {
        let data = json!({"leaderboards": [{"name": 3, "results": []}]});
        let err = validate(&data).unwrap_err();

        let text = err.to_string();
        assert!(text.contains("leaderboards -> 0 -> name"), "{}", text);
    }
}
