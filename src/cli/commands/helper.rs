use std::path::PathBuf;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::{LocaleStore, StoreWarning};
use crate::rules::detect_base_locale;

/// Shared command setup: the loaded configuration plus the store and source
/// root derived from it, with command-line overrides applied.
pub struct CommandContext {
    pub config: Config,
    pub store: LocaleStore,
    pub source_root: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
        let mut config = load_config(&cwd)?.config;

        if let Some(base_locale) = &common.base_locale {
            config.base_locale = Some(base_locale.clone());
        }
        let locales_root = common
            .locales_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.locales_root));
        let source_root = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_root));

        Ok(Self {
            store: LocaleStore::new(locales_root),
            source_root,
            verbose: common.verbose,
            config,
        })
    }

    /// The base locale from config or detection. Errors when there are no
    /// locale files to detect one from.
    pub fn require_base_locale(&self, warnings: &mut Vec<StoreWarning>) -> Result<String> {
        let base = detect_base_locale(&self.store, self.config.base_locale.as_deref());
        warnings.extend(base.warnings);
        base.locale.with_context(|| {
            format!(
                "No locale files found under {}",
                self.store.root().display()
            )
        })
    }
}
