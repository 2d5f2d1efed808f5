//! Commands that analyze locale coverage, duplication and key usage.

use anyhow::Result;

use super::super::args::{
    CheckCommand, DuplicatesCommand, MissingTranslationsCommand, StatsCommand,
};
use super::helper::CommandContext;
use super::{CheckOutput, CommandResult, DuplicatesOutput, StatsOutput, StatsRow, UsageOutput};
use crate::rules::completeness::check_completeness;
use crate::rules::duplicates::find_duplicates;
use crate::rules::usage::{cross_check, scan_usages};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut warnings = Vec::new();
    let base_locale = ctx.require_base_locale(&mut warnings)?;

    let mut report = check_completeness(&ctx.store, &base_locale);
    warnings.append(&mut report.warnings);

    Ok(CommandResult {
        output: CheckOutput {
            report,
            detailed: cmd.detailed,
        }
        .into(),
        warnings,
    })
}

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut warnings = Vec::new();
    let base_locale = ctx.require_base_locale(&mut warnings)?;

    let mut report = check_completeness(&ctx.store, &base_locale);
    warnings.append(&mut report.warnings);

    // Coverage comes from the completeness report; key counts are each
    // locale's own, so locales with extra keys show more than the base.
    let mut rows = vec![StatsRow {
        locale: base_locale.clone(),
        keys: report.base_keys,
        coverage: 100.0,
        is_base: true,
    }];
    let list = ctx.store.list_locales();
    for locale in &list.locales {
        if *locale == base_locale {
            continue;
        }
        let load = ctx.store.load(locale);
        warnings.extend(load.warnings);
        let keys = load
            .document
            .map(|document| document.leaf_paths().len())
            .unwrap_or(0);
        let coverage = report
            .locales
            .iter()
            .find(|entry| entry.locale == *locale)
            .map(|entry| entry.percentage())
            .unwrap_or(0.0);
        rows.push(StatsRow {
            locale: locale.clone(),
            keys,
            coverage,
            is_base: false,
        });
    }

    Ok(CommandResult {
        output: StatsOutput {
            base_locale,
            rows,
        }
        .into(),
        warnings,
    })
}

pub fn duplicates(cmd: DuplicatesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut warnings = Vec::new();
    let base_locale = ctx.require_base_locale(&mut warnings)?;

    let mut report = find_duplicates(&ctx.store, &base_locale);
    warnings.append(&mut report.warnings);

    Ok(CommandResult {
        output: DuplicatesOutput { report }.into(),
        warnings,
    })
}

pub fn missing_translations(cmd: MissingTranslationsCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut warnings = Vec::new();
    let base_locale = ctx.require_base_locale(&mut warnings)?;

    let usage = scan_usages(
        &ctx.source_root,
        &ctx.config.extensions,
        &ctx.config.ignores,
        ctx.verbose,
    );
    let mut report = cross_check(&ctx.store, &base_locale, &usage);
    warnings.append(&mut report.warnings);

    Ok(CommandResult {
        output: UsageOutput { report }.into(),
        warnings,
    })
}
