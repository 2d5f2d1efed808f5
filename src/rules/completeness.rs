//! Coverage of every locale against the base locale's key set.

use std::collections::BTreeMap;

use crate::core::{KeyPath, LocaleStore, StoreWarning};

/// Conventional English locales probed when no base is configured.
pub const BASE_LOCALE_CANDIDATES: [&str; 4] = ["en", "en-US", "en_US", "en-GB"];

#[derive(Debug)]
pub struct BaseLocale {
    pub locale: Option<String>,
    pub warnings: Vec<StoreWarning>,
}

/// Pick the base locale: explicit configuration wins, then the first
/// conventional English locale present, then the lexically first locale
/// with a warning.
pub fn detect_base_locale(store: &LocaleStore, configured: Option<&str>) -> BaseLocale {
    let list = store.list_locales();
    let mut warnings = list.warnings;

    if let Some(locale) = configured {
        if !list.locales.iter().any(|known| known == locale) {
            warnings.push(StoreWarning::UnknownLocale {
                locale: locale.to_string(),
            });
        }
        return BaseLocale {
            locale: Some(locale.to_string()),
            warnings,
        };
    }

    for candidate in BASE_LOCALE_CANDIDATES {
        if list.locales.iter().any(|known| known == candidate) {
            return BaseLocale {
                locale: Some(candidate.to_string()),
                warnings,
            };
        }
    }

    let fallback = list.locales.first().cloned();
    if let Some(locale) = &fallback {
        warnings.push(StoreWarning::BaseLocaleFallback {
            locale: locale.clone(),
        });
    }
    BaseLocale {
        locale: fallback,
        warnings,
    }
}

/// Coverage numbers for one locale.
#[derive(Debug)]
pub struct LocaleCompleteness {
    pub locale: String,
    /// Base key count the locale is measured against.
    pub total: usize,
    pub complete: usize,
    /// Base keys with no usable value in this locale, in base key order.
    pub missing: Vec<String>,
}

impl LocaleCompleteness {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.complete as f64 * 100.0 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Missing-key count for one top-level section, summed over all locales.
#[derive(Debug)]
pub struct SectionGap {
    pub section: String,
    pub missing: usize,
}

#[derive(Debug)]
pub struct CompletenessReport {
    pub base_locale: String,
    pub base_keys: usize,
    /// Every known locale except the base, in locale order.
    pub locales: Vec<LocaleCompleteness>,
    /// Sections ranked by missing count, largest gap first.
    pub sections: Vec<SectionGap>,
    pub warnings: Vec<StoreWarning>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCompleteness::is_complete)
    }
}

/// Measure every locale against the base locale's leaf keys.
///
/// A key counts as covered when it resolves to a non-null value; empty
/// strings pass here, the stricter usage cross-check is a separate rule.
pub fn check_completeness(store: &LocaleStore, base_locale: &str) -> CompletenessReport {
    let list = store.list_locales();
    let mut warnings = list.warnings;

    let base_load = store.load(base_locale);
    warnings.extend(base_load.warnings);
    let base_doc = base_load.document.unwrap_or_default();

    // Keys with empty segments are unreachable through path resolution
    let base_keys: Vec<(String, KeyPath)> = base_doc
        .leaf_paths()
        .into_iter()
        .filter_map(|raw| KeyPath::parse(&raw).ok().map(|path| (raw, path)))
        .collect();

    let mut locales = Vec::new();
    let mut section_gaps: BTreeMap<String, usize> = BTreeMap::new();

    for locale in &list.locales {
        if locale == base_locale {
            continue;
        }
        let load = store.load(locale);
        warnings.extend(load.warnings);
        let document = load.document.unwrap_or_default();

        let mut missing = Vec::new();
        for (raw, path) in &base_keys {
            let present = document.resolve(path).is_some_and(|v| !v.is_null());
            if !present {
                *section_gaps.entry(section_of(raw).to_string()).or_default() += 1;
                missing.push(raw.clone());
            }
        }
        locales.push(LocaleCompleteness {
            locale: locale.clone(),
            total: base_keys.len(),
            complete: base_keys.len() - missing.len(),
            missing,
        });
    }

    let mut sections: Vec<SectionGap> = section_gaps
        .into_iter()
        .map(|(section, missing)| SectionGap { section, missing })
        .collect();
    sections.sort_by(|a, b| b.missing.cmp(&a.missing).then_with(|| a.section.cmp(&b.section)));

    CompletenessReport {
        base_locale: base_locale.to_string(),
        base_keys: base_keys.len(),
        locales,
        sections,
        warnings,
    }
}

/// Top-level section of a dot-separated key.
pub(crate) fn section_of(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}
