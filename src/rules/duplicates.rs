//! Identical translation values shared by several locales at one key.
//!
//! A value that reads the same in two locales was usually copy-pasted or
//! never localized. Only values with alphabetic content participate;
//! symbols and numbers repeat across locales legitimately.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::{KeyPath, LocaleDocument, LocaleStore, StoreWarning};
use crate::utils::contains_alphabetic;

#[derive(Debug)]
pub struct DuplicateGroup {
    /// Dot-separated leaf path in the base document.
    pub path: String,
    pub value: String,
    /// Locales sharing the value, sorted by name.
    pub locales: Vec<String>,
}

#[derive(Debug, Default)]
pub struct DuplicateReport {
    pub groups: Vec<DuplicateGroup>,
    pub warnings: Vec<StoreWarning>,
}

impl DuplicateReport {
    /// Distinct key paths with at least one shared value.
    pub fn total_paths(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&str> = None;
        for group in &self.groups {
            if last != Some(group.path.as_str()) {
                count += 1;
                last = Some(&group.path);
            }
        }
        count
    }
}

/// Compare every known locale's value at each base leaf path and report
/// values held identically by two or more locales.
///
/// Groups come out in base key order, then by value.
pub fn find_duplicates(store: &LocaleStore, base_locale: &str) -> DuplicateReport {
    let list = store.list_locales();
    let mut report = DuplicateReport {
        groups: Vec::new(),
        warnings: list.warnings,
    };

    let mut documents: Vec<(String, LocaleDocument)> = Vec::new();
    for locale in &list.locales {
        let load = store.load(locale);
        report.warnings.extend(load.warnings);
        if let Some(document) = load.document {
            documents.push((locale.clone(), document));
        }
    }

    // A configured base missing from the listing still defines the key set
    let base_doc = match documents.iter().find(|(locale, _)| locale == base_locale) {
        Some((_, document)) => document.clone(),
        None => {
            let load = store.load(base_locale);
            report.warnings.extend(load.warnings);
            match load.document {
                Some(document) => document,
                None => return report,
            }
        }
    };

    for raw in base_doc.leaf_paths() {
        let Ok(path) = KeyPath::parse(&raw) else {
            continue;
        };
        let mut by_value: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (locale, document) in &documents {
            let Some(Value::String(value)) = document.resolve(&path) else {
                continue;
            };
            if !contains_alphabetic(value) {
                continue;
            }
            by_value.entry(value.clone()).or_default().push(locale.clone());
        }
        for (value, locales) in by_value {
            if locales.len() > 1 {
                report.groups.push(DuplicateGroup {
                    path: raw.clone(),
                    value,
                    locales,
                });
            }
        }
    }
    report
}
