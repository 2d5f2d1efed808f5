//! Translation keys referenced by project sources, cross-checked against
//! what the base locale actually provides.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::core::{KeyPath, LocaleDocument, LocaleStore, StoreWarning};
use crate::rules::completeness::section_of;
use crate::rules::helpers::{collect_source_files, read_source_file};

/// Bare calls: `t('key')`, `$t("key", { n: 2 })`, `i18n.t('key')`.
static CALL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt\(\s*['"]([\w.-]+)['"]\s*[,)]"#).unwrap());

/// Template interpolations: `{{ t('key') }}`, `{{ $t('key') }}`.
static INTERPOLATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{\{\s*\$?t\(\s*['"]([\w.-]+)['"]"#).unwrap());

/// Every statically-written translation key in one file, deduplicated.
pub fn extract_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for pattern in [&CALL_PATTERN, &INTERPOLATION_PATTERN] {
        for capture in pattern.captures_iter(content) {
            if let Some(key) = capture.get(1) {
                keys.insert(key.as_str().to_string());
            }
        }
    }
    keys
}

/// Keys collected across a source tree.
#[derive(Debug, Default)]
pub struct UsageScan {
    /// Files that referenced at least one key, with their sorted key lists.
    pub by_file: Vec<(String, Vec<String>)>,
    /// Union of keys over all files.
    pub keys: BTreeSet<String>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

pub fn scan_usages(
    root: &Path,
    extensions: &[String],
    ignores: &[String],
    verbose: bool,
) -> UsageScan {
    let scan = collect_source_files(root, extensions, ignores, verbose);
    let mut usage = UsageScan {
        skipped_count: scan.skipped_count,
        ..Default::default()
    };

    for relative in &scan.files {
        let Some(content) = read_source_file(root, relative, verbose) else {
            continue;
        };
        usage.files_scanned += 1;
        let keys = extract_keys(&content);
        if keys.is_empty() {
            continue;
        }
        usage.keys.extend(keys.iter().cloned());
        usage
            .by_file
            .push((relative.display().to_string(), keys.into_iter().collect()));
    }
    usage
}

/// Keys-used and keys-missing counts for one top-level section.
#[derive(Debug)]
pub struct SectionUsage {
    pub section: String,
    pub used: usize,
    pub missing: usize,
}

#[derive(Debug)]
pub struct CrossCheckReport {
    pub base_locale: String,
    /// Used keys the base locale translates.
    pub found: Vec<String>,
    /// Used keys with no usable base translation.
    pub missing: Vec<String>,
    pub missing_by_file: Vec<(String, Vec<String>)>,
    /// Sections ranked by missing count, largest gap first.
    pub sections: Vec<SectionUsage>,
    pub files_scanned: usize,
    pub skipped_count: usize,
    pub warnings: Vec<StoreWarning>,
}

impl CrossCheckReport {
    pub fn used_total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

/// Partition the scanned keys into found and missing against the base locale.
pub fn cross_check(store: &LocaleStore, base_locale: &str, usage: &UsageScan) -> CrossCheckReport {
    let load = store.load(base_locale);
    let warnings = load.warnings;
    let document = load.document.unwrap_or_default();

    let mut found = Vec::new();
    let mut missing = Vec::new();
    let mut missing_set: BTreeSet<&str> = BTreeSet::new();
    for key in &usage.keys {
        if key_translates(&document, key) {
            found.push(key.clone());
        } else {
            missing_set.insert(key);
            missing.push(key.clone());
        }
    }

    let mut missing_by_file = Vec::new();
    for (file, keys) in &usage.by_file {
        let file_missing: Vec<String> = keys
            .iter()
            .filter(|key| missing_set.contains(key.as_str()))
            .cloned()
            .collect();
        if !file_missing.is_empty() {
            missing_by_file.push((file.clone(), file_missing));
        }
    }

    let mut by_section: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for key in &usage.keys {
        let entry = by_section.entry(section_of(key)).or_default();
        entry.0 += 1;
        if missing_set.contains(key.as_str()) {
            entry.1 += 1;
        }
    }
    let mut sections: Vec<SectionUsage> = by_section
        .into_iter()
        .map(|(section, (used, missing))| SectionUsage {
            section: section.to_string(),
            used,
            missing,
        })
        .collect();
    sections.sort_by(|a, b| b.missing.cmp(&a.missing).then_with(|| a.section.cmp(&b.section)));

    CrossCheckReport {
        base_locale: base_locale.to_string(),
        found,
        missing,
        missing_by_file,
        sections,
        files_scanned: usage.files_scanned,
        skipped_count: usage.skipped_count,
        warnings,
    }
}

/// The strict presence rule for used keys: the key must resolve to a
/// non-null, non-empty-string value. An empty string satisfies a coverage
/// check but not a key that sources actually render.
fn key_translates(document: &LocaleDocument, key: &str) -> bool {
    let Ok(path) = KeyPath::parse(key) else {
        return false;
    };
    match document.resolve(&path) {
        Some(Value::Null) | None => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
