//! Locale document model: a tree of nested objects with scalar leaves,
//! addressed by dot-separated key paths.

use std::fmt;

use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// A parsed dot-separated key path, e.g. "common.loading".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a raw dot-separated path.
    ///
    /// Fails on an empty path or an empty segment ("a..b").
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            bail!("key path must not be empty");
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            bail!("key path has an empty segment");
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment, used for grouping reports by section.
    pub fn section(&self) -> &str {
        &self.segments[0]
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Action taken on the final key of an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
    Added,
    Updated,
    Skipped,
}

impl InsertAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertAction::Added => "added",
            InsertAction::Updated => "updated",
            InsertAction::Skipped => "skipped",
        }
    }
}

/// Outcome of an insert, including any scalar-to-object conversions
/// performed along the way.
#[derive(Debug)]
pub struct InsertOutcome {
    pub action: InsertAction,
    /// Key-path prefixes whose scalar values were replaced by objects.
    pub converted: Vec<String>,
}

/// One locale's translation tree. Inner nodes are objects; strings, numbers,
/// booleans and arrays are leaves.
///
/// Key order follows the underlying file and is preserved through mutation
/// and serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleDocument {
    root: Map<String, Value>,
}

impl LocaleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parse a JSON document. The root must be an object.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => bail!("root of locale document must be an object"),
        }
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Walk the path through nested objects.
    ///
    /// Returns `None` if any segment is absent or an intermediate node is not
    /// an object (scalars and arrays cannot be descended into).
    pub fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.root.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Set the value at a path, creating intermediate objects as needed.
    ///
    /// An intermediate segment holding a scalar is replaced by an empty
    /// object; each such conversion is recorded in the outcome so callers
    /// can warn about it. With `skip_if_exists`, an already-present final
    /// key is left untouched.
    pub fn insert(&mut self, path: &KeyPath, value: Value, skip_if_exists: bool) -> InsertOutcome {
        let mut converted = Vec::new();
        let mut walked: Vec<&str> = Vec::new();
        let action = insert_nested(
            &mut self.root,
            path.segments(),
            value,
            skip_if_exists,
            &mut walked,
            &mut converted,
        );
        InsertOutcome { action, converted }
    }

    /// Flat list of every leaf path, depth-first in key order.
    ///
    /// Objects are expanded; arrays count as leaves.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.root, String::new(), &mut paths);
        paths
    }
}

fn insert_nested<'a>(
    root: &mut Map<String, Value>,
    path: &'a [String],
    value: Value,
    skip_if_exists: bool,
    walked: &mut Vec<&'a str>,
    converted: &mut Vec<String>,
) -> InsertAction {
    // KeyPath::parse guarantees at least one segment
    if path.len() == 1 {
        let key = path[0].clone();
        if root.contains_key(&key) {
            if skip_if_exists {
                return InsertAction::Skipped;
            }
            root.insert(key, value);
            return InsertAction::Updated;
        }
        root.insert(key, value);
        return InsertAction::Added;
    }

    let key = path[0].clone();
    walked.push(&path[0]);
    let next_level = root.entry(key).or_insert_with(|| Value::Object(Map::new()));

    // A scalar (or array) in the way is replaced by an empty object
    if !next_level.is_object() {
        converted.push(walked.join("."));
        *next_level = Value::Object(Map::new());
    }

    let inner_map = next_level.as_object_mut().unwrap();
    insert_nested(inner_map, &path[1..], value, skip_if_exists, walked, converted)
}

fn collect_leaf_paths(map: &Map<String, Value>, prefix: String, paths: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => collect_leaf_paths(inner, path, paths),
            _ => paths.push(path),
        }
    }
}
