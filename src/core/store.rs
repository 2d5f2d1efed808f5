//! Filesystem-backed store of per-locale translation documents.
//!
//! Each locale lives in `<root>/<locale>.json`; a legacy `<locale>.js` module
//! is readable through [`crate::core::fallback`] until the first write
//! migrates it. Every operation re-reads the files it touches, so concurrent
//! edits are last-writer-wins at file granularity.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::document::{InsertAction, KeyPath, LocaleDocument};
use crate::core::fallback;

pub const PRIMARY_EXT: &str = "json";
pub const FALLBACK_EXT: &str = "js";

/// Barrel files like `index.js` are not locales.
const INDEX_STEM: &str = "index";

/// Final state of a single set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Added,
    Updated,
    Skipped,
    Failed,
}

impl SetOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetOutcome::Added => "added",
            SetOutcome::Updated => "updated",
            SetOutcome::Skipped => "skipped",
            SetOutcome::Failed => "failed",
        }
    }

    /// True when the value was actually written.
    pub fn is_applied(&self) -> bool {
        matches!(self, SetOutcome::Added | SetOutcome::Updated)
    }
}

impl From<InsertAction> for SetOutcome {
    fn from(action: InsertAction) -> Self {
        match action {
            InsertAction::Added => SetOutcome::Added,
            InsertAction::Updated => SetOutcome::Updated,
            InsertAction::Skipped => SetOutcome::Skipped,
        }
    }
}

/// Non-fatal condition met while working against the locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWarning {
    MissingDir { dir: String },
    NoLocaleFiles { dir: String },
    MissingLocale { locale: String },
    UnknownLocale { locale: String },
    ParseError { file_path: String, error: String },
    FallbackExtraction { file_path: String },
    ScalarConverted { locale: String, prefix: String },
    InvalidPath { path: String, error: String },
    BaseLocaleFallback { locale: String },
}

impl fmt::Display for StoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreWarning::MissingDir { dir } => {
                write!(f, "locales directory '{}' does not exist", dir)
            }
            StoreWarning::NoLocaleFiles { dir } => {
                write!(f, "no locale files found in '{}'", dir)
            }
            StoreWarning::MissingLocale { locale } => {
                write!(f, "locale '{}' has no file on disk", locale)
            }
            StoreWarning::UnknownLocale { locale } => {
                write!(f, "unknown locale '{}'", locale)
            }
            StoreWarning::ParseError { file_path, error } => {
                write!(f, "failed to parse {}: {}", file_path, error)
            }
            StoreWarning::FallbackExtraction { file_path } => {
                write!(f, "could not extract locale data from {}", file_path)
            }
            StoreWarning::ScalarConverted { locale, prefix } => {
                write!(
                    f,
                    "replaced scalar at '{}' in locale '{}' with an object",
                    prefix, locale
                )
            }
            StoreWarning::InvalidPath { path, error } => {
                write!(f, "cannot set '{}': {}", path, error)
            }
            StoreWarning::BaseLocaleFallback { locale } => {
                write!(
                    f,
                    "no base locale configured or detected, falling back to '{}'",
                    locale
                )
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct LocaleList {
    pub locales: Vec<String>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug)]
pub struct LoadResult {
    pub document: Option<LocaleDocument>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug)]
pub struct GetResult {
    pub value: Option<Value>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug)]
pub struct HasResult {
    pub present: bool,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug)]
pub struct SetResult {
    pub outcome: SetOutcome,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Default)]
pub struct BatchSetResult {
    pub outcomes: Vec<(String, SetOutcome)>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Default)]
pub struct GetAllResult {
    pub values: Map<String, Value>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Default)]
pub struct MissingResult {
    pub locales: Vec<String>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Default)]
pub struct CopyResult {
    pub value: Option<Value>,
    pub outcomes: Vec<(String, SetOutcome)>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone)]
pub struct LocaleStore {
    root: PathBuf,
}

impl LocaleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn primary_path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{}.{}", locale, PRIMARY_EXT))
    }

    fn fallback_path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{}.{}", locale, FALLBACK_EXT))
    }

    /// Locales present on disk, deduplicated across both file formats and
    /// sorted by name.
    pub fn list_locales(&self) -> LocaleList {
        let mut list = LocaleList::default();
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => {
                list.warnings.push(StoreWarning::MissingDir {
                    dir: self.root.display().to_string(),
                });
                return list;
            }
        };

        let mut locales: BTreeSet<String> = BTreeSet::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            if ext != PRIMARY_EXT && ext != FALLBACK_EXT {
                continue;
            }
            if stem == INDEX_STEM {
                continue;
            }
            locales.insert(stem.to_string());
        }

        if locales.is_empty() {
            list.warnings.push(StoreWarning::NoLocaleFiles {
                dir: self.root.display().to_string(),
            });
        }
        list.locales = locales.into_iter().collect();
        list
    }

    /// Load one locale, preferring the JSON file.
    ///
    /// A present-but-unreadable JSON file yields no document rather than
    /// silently switching to a possibly stale JS module.
    pub fn load(&self, locale: &str) -> LoadResult {
        let mut warnings = Vec::new();

        let primary = self.primary_path(locale);
        if primary.is_file() {
            let parsed = fs::read_to_string(&primary)
                .map_err(|err| err.to_string())
                .and_then(|content| {
                    LocaleDocument::parse(&content).map_err(|err| err.to_string())
                });
            match parsed {
                Ok(document) => {
                    return LoadResult {
                        document: Some(document),
                        warnings,
                    };
                }
                Err(error) => {
                    warnings.push(StoreWarning::ParseError {
                        file_path: primary.display().to_string(),
                        error,
                    });
                    return LoadResult {
                        document: None,
                        warnings,
                    };
                }
            }
        }

        let fallback_path = self.fallback_path(locale);
        if fallback_path.is_file() {
            if let Ok(content) = fs::read_to_string(&fallback_path)
                && let Some(document) = fallback::extract_object_literal(&content)
            {
                return LoadResult {
                    document: Some(document),
                    warnings,
                };
            }
            warnings.push(StoreWarning::FallbackExtraction {
                file_path: fallback_path.display().to_string(),
            });
            return LoadResult {
                document: None,
                warnings,
            };
        }

        warnings.push(StoreWarning::MissingLocale {
            locale: locale.to_string(),
        });
        LoadResult {
            document: None,
            warnings,
        }
    }

    /// Write a document to the locale's JSON file, pretty-printed with a
    /// trailing newline.
    pub fn save(&self, locale: &str, document: &LocaleDocument) -> Result<()> {
        let path = self.primary_path(locale);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(document.root())
            .with_context(|| format!("Failed to serialize locale '{}'", locale))?;
        fs::write(&path, format!("{}\n", json))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Read one value. Null leaves count as absent.
    pub fn get(&self, locale: &str, path: &KeyPath) -> GetResult {
        let loaded = self.load(locale);
        let value = loaded
            .document
            .as_ref()
            .and_then(|doc| doc.resolve(path))
            .filter(|v| !v.is_null())
            .cloned();
        GetResult {
            value,
            warnings: loaded.warnings,
        }
    }

    /// Whether a usable value exists at the path.
    pub fn has(&self, locale: &str, path: &KeyPath) -> HasResult {
        let result = self.get(locale, path);
        HasResult {
            present: result.value.is_some(),
            warnings: result.warnings,
        }
    }

    /// Set one value in one locale and persist the change.
    ///
    /// Only write failures are hard errors; unknown locales, unreadable files
    /// and skips are reported through the outcome and warnings instead.
    pub fn set(
        &self,
        locale: &str,
        path: &KeyPath,
        value: Value,
        skip_if_exists: bool,
    ) -> Result<SetResult> {
        let list = self.list_locales();
        let mut warnings = list.warnings;
        if !list.locales.iter().any(|known| known == locale) {
            warnings.push(StoreWarning::UnknownLocale {
                locale: locale.to_string(),
            });
            return Ok(SetResult {
                outcome: SetOutcome::Failed,
                warnings,
            });
        }

        let loaded = self.load(locale);
        let parse_failed = loaded
            .warnings
            .iter()
            .any(|w| matches!(w, StoreWarning::ParseError { .. }));
        warnings.extend(loaded.warnings);

        let mut document = match loaded.document {
            Some(document) => document,
            None if parse_failed => {
                // Refuse to clobber a file we could not read
                return Ok(SetResult {
                    outcome: SetOutcome::Failed,
                    warnings,
                });
            }
            // Failed JS extraction or nothing on disk: start fresh
            None => LocaleDocument::new(),
        };

        let outcome = document.insert(path, value, skip_if_exists);
        for prefix in &outcome.converted {
            warnings.push(StoreWarning::ScalarConverted {
                locale: locale.to_string(),
                prefix: prefix.clone(),
            });
        }
        if outcome.action == InsertAction::Skipped {
            return Ok(SetResult {
                outcome: SetOutcome::Skipped,
                warnings,
            });
        }

        self.save(locale, &document)?;
        Ok(SetResult {
            outcome: outcome.action.into(),
            warnings,
        })
    }

    /// Apply one key across several locales, one set per entry.
    pub fn set_multiple(
        &self,
        path: &KeyPath,
        values: &Map<String, Value>,
        skip_if_exists: bool,
    ) -> Result<BatchSetResult> {
        let mut result = BatchSetResult::default();
        for (locale, value) in values {
            let set = self.set(locale, path, value.clone(), skip_if_exists)?;
            result.warnings.extend(set.warnings);
            result.outcomes.push((locale.clone(), set.outcome));
        }
        Ok(result)
    }

    /// The value of one key across every known locale. Locales where the key
    /// is absent are omitted.
    pub fn get_all(&self, path: &KeyPath) -> GetAllResult {
        let list = self.list_locales();
        let mut result = GetAllResult {
            values: Map::new(),
            warnings: list.warnings,
        };
        for locale in &list.locales {
            let get = self.get(locale, path);
            result.warnings.extend(get.warnings);
            if let Some(value) = get.value {
                result.values.insert(locale.clone(), value);
            }
        }
        result
    }

    /// Known locales where the key has no usable value.
    pub fn get_missing(&self, path: &KeyPath) -> MissingResult {
        let list = self.list_locales();
        let mut result = MissingResult {
            locales: Vec::new(),
            warnings: list.warnings,
        };
        for locale in &list.locales {
            let get = self.get(locale, path);
            result.warnings.extend(get.warnings);
            if get.value.is_none() {
                result.locales.push(locale.clone());
            }
        }
        result
    }

    /// Copy a key's value from one locale into others. Without explicit
    /// targets, every other known locale receives the value.
    ///
    /// A missing source value leaves the outcome list empty.
    pub fn copy(
        &self,
        source: &str,
        path: &KeyPath,
        targets: Option<&[String]>,
        skip_if_exists: bool,
    ) -> Result<CopyResult> {
        let mut result = CopyResult::default();

        let get = self.get(source, path);
        result.warnings.extend(get.warnings);
        let Some(value) = get.value else {
            return Ok(result);
        };
        result.value = Some(value.clone());

        let targets: Vec<String> = match targets {
            Some(targets) => targets.to_vec(),
            None => {
                let list = self.list_locales();
                result.warnings.extend(list.warnings);
                list.locales
                    .into_iter()
                    .filter(|locale| locale != source)
                    .collect()
            }
        };

        for locale in &targets {
            let set = self.set(locale, path, value.clone(), skip_if_exists)?;
            result.warnings.extend(set.warnings);
            result.outcomes.push((locale.clone(), set.outcome));
        }
        Ok(result)
    }

    /// Merge a flat map of dot-separated paths into one locale.
    ///
    /// Invalid paths fail individually without aborting the rest.
    pub fn merge(
        &self,
        locale: &str,
        entries: &Map<String, Value>,
        skip_if_exists: bool,
    ) -> Result<BatchSetResult> {
        let mut result = BatchSetResult::default();
        for (raw_path, value) in entries {
            let path = match KeyPath::parse(raw_path) {
                Ok(path) => path,
                Err(err) => {
                    result.warnings.push(StoreWarning::InvalidPath {
                        path: raw_path.clone(),
                        error: err.to_string(),
                    });
                    result.outcomes.push((raw_path.clone(), SetOutcome::Failed));
                    continue;
                }
            };
            let set = self.set(locale, &path, value.clone(), skip_if_exists)?;
            result.warnings.extend(set.warnings);
            result.outcomes.push((raw_path.clone(), set.outcome));
        }
        Ok(result)
    }
}
