//! Report formatting and printing utilities.
//!
//! This module implements [`Render`] for every command output and displays
//! hardcoded-text findings in cargo-style format. Separate from core logic to
//! allow lingo to be used as a library.

use std::collections::BTreeSet;
use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BatchSetOutput, CheckOutput, CommandResult, CopyOutput, DuplicatesOutput, GetAllOutput,
    HardcodeOutput, HasOutput, InitOutput, LocalesOutput, MergeOutput, MissingOutput, Render,
    SetOutput, StatsOutput, UsageOutput, ValueOutput,
};
use super::exit_status::ExitStatus;
use crate::config::CONFIG_FILE_NAME;
use crate::core::{SetOutcome, StoreWarning};
use crate::issues::{Finding, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: the output itself, then any warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    result.output.render(verbose);
    print_warnings(&result.warnings);
}

/// Print store warnings to stderr, deduplicated by message.
pub fn print_warnings(warnings: &[StoreWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

/// Print store warnings to a custom writer.
pub fn print_warnings_to<W: Write>(warnings: &[StoreWarning], writer: &mut W) {
    let mut seen: Vec<String> = Vec::new();
    for warning in warnings {
        let message = warning.to_string();
        if seen.contains(&message) {
            continue;
        }
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
        seen.push(message);
    }
}

/// Note skipped files on stderr unless verbose already listed them.
fn print_skip_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) skipped (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Store Command Output
// ============================================================

/// Strings print bare so values can be piped; everything else prints as
/// compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Render for ValueOutput {
    fn render(&self, _verbose: bool) {
        match &self.value {
            Some(value) => println!("{}", display_value(value)),
            None => println!("{}", "(not set)".dimmed()),
        }
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

impl Render for HasOutput {
    fn render(&self, _verbose: bool) {
        println!("{}", self.present);
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

fn print_outcome_line(outcome: SetOutcome, key: &str, locale: &str) {
    match outcome {
        SetOutcome::Added | SetOutcome::Updated => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} '{}' in {}", outcome.as_str(), key, locale).green()
        ),
        SetOutcome::Skipped => println!(
            "{}",
            format!("- '{}' already set in {}, skipped", key, locale).dimmed()
        ),
        SetOutcome::Failed => println!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("failed to set '{}' in {}", key, locale).red()
        ),
    }
}

fn batch_status(outcomes: &[(String, SetOutcome)]) -> ExitStatus {
    if outcomes
        .iter()
        .any(|(_, outcome)| matches!(outcome, SetOutcome::Failed))
    {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

fn print_batch_summary(outcomes: &[(String, SetOutcome)]) {
    if outcomes.len() < 2 {
        return;
    }
    let applied = outcomes
        .iter()
        .filter(|(_, outcome)| outcome.is_applied())
        .count();
    let skipped = outcomes
        .iter()
        .filter(|(_, outcome)| matches!(outcome, SetOutcome::Skipped))
        .count();
    let failed = outcomes
        .iter()
        .filter(|(_, outcome)| matches!(outcome, SetOutcome::Failed))
        .count();

    let mut parts = vec![format!("{} applied", applied)];
    if skipped > 0 {
        parts.push(format!("{} skipped", skipped));
    }
    if failed > 0 {
        parts.push(format!("{} failed", failed));
    }
    println!("{}", parts.join(", ").dimmed());
}

impl Render for SetOutput {
    fn render(&self, _verbose: bool) {
        print_outcome_line(self.outcome, &self.key, &self.locale);
    }

    fn status(&self) -> ExitStatus {
        match self.outcome {
            SetOutcome::Failed => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl Render for BatchSetOutput {
    fn render(&self, _verbose: bool) {
        for (locale, outcome) in &self.outcomes {
            print_outcome_line(*outcome, &self.key, locale);
        }
        print_batch_summary(&self.outcomes);
    }

    fn status(&self) -> ExitStatus {
        batch_status(&self.outcomes)
    }
}

impl Render for MergeOutput {
    fn render(&self, _verbose: bool) {
        for (key, outcome) in &self.outcomes {
            print_outcome_line(*outcome, key, &self.locale);
        }
        print_batch_summary(&self.outcomes);
    }

    fn status(&self) -> ExitStatus {
        batch_status(&self.outcomes)
    }
}

impl Render for GetAllOutput {
    fn render(&self, _verbose: bool) {
        if self.values.is_empty() {
            println!(
                "{}",
                format!("'{}' is not set in any locale", self.key).dimmed()
            );
            return;
        }
        let width = self
            .values
            .keys()
            .map(|locale| locale.chars().count())
            .max()
            .unwrap_or(0);
        for (locale, value) in &self.values {
            let padded = format!("{:<width$}", locale, width = width);
            println!("{}  {}", padded.bold(), display_value(value));
        }
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

impl Render for MissingOutput {
    fn render(&self, _verbose: bool) {
        if self.locales.is_empty() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("'{}' is set in every locale", self.key).green()
            );
            return;
        }
        for locale in &self.locales {
            println!("{}", locale);
        }
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

impl Render for CopyOutput {
    fn render(&self, _verbose: bool) {
        if self.value.is_none() {
            eprintln!(
                "{} {}",
                FAILURE_MARK.red(),
                format!("'{}' has no usable value in {}", self.key, self.source).red()
            );
            return;
        }
        for (locale, outcome) in &self.outcomes {
            print_outcome_line(*outcome, &self.key, locale);
        }
        print_batch_summary(&self.outcomes);
    }

    fn status(&self) -> ExitStatus {
        if self.value.is_none() {
            return ExitStatus::Failure;
        }
        batch_status(&self.outcomes)
    }
}

impl Render for LocalesOutput {
    fn render(&self, _verbose: bool) {
        for locale in &self.locales {
            println!("{}", locale);
        }
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

// ============================================================
// Analysis Command Output
// ============================================================

impl Render for StatsOutput {
    fn render(&self, _verbose: bool) {
        let width = self
            .rows
            .iter()
            .map(|row| row.locale.chars().count())
            .max()
            .unwrap_or(0)
            .max("locale".len());

        let header = format!("{:<width$}  {:>6}  {:>8}", "locale", "keys", "coverage", width = width);
        println!("{}", header.bold());
        for row in &self.rows {
            let suffix = if row.is_base { "  (base)" } else { "" };
            println!(
                "{:<width$}  {:>6}  {:>7.1}%{}",
                row.locale,
                row.keys,
                row.coverage,
                suffix,
                width = width
            );
        }
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

impl Render for CheckOutput {
    fn render(&self, _verbose: bool) {
        let report = &self.report;
        println!(
            "Checking {} locale(s) against '{}' ({} key(s))",
            report.locales.len(),
            report.base_locale,
            report.base_keys
        );

        let width = report
            .locales
            .iter()
            .map(|entry| entry.locale.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &report.locales {
            let padded = format!("{:<width$}", entry.locale, width = width);
            if entry.is_complete() {
                println!(
                    "{} {}  {}/{} (100%)",
                    SUCCESS_MARK.green(),
                    padded,
                    entry.complete,
                    entry.total
                );
            } else {
                println!(
                    "{} {}  {}/{} ({:.1}%)",
                    FAILURE_MARK.red(),
                    padded,
                    entry.complete,
                    entry.total,
                    entry.percentage()
                );
                if self.detailed {
                    for key in &entry.missing {
                        println!("    {}", key.dimmed());
                    }
                }
            }
        }

        if !report.sections.is_empty() {
            println!();
            println!("{}", "Missing keys by section:".bold());
            let width = report
                .sections
                .iter()
                .map(|gap| gap.section.chars().count())
                .max()
                .unwrap_or(0);
            for gap in &report.sections {
                println!(
                    "  {:<width$}  {} missing",
                    gap.section,
                    gap.missing,
                    width = width
                );
            }
        }

        println!();
        if report.is_complete() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                "All locales are complete".green()
            );
        } else {
            let incomplete = report
                .locales
                .iter()
                .filter(|entry| !entry.is_complete())
                .count();
            println!(
                "{} {} locale(s) incomplete",
                FAILURE_MARK.red(),
                incomplete
            );
        }
    }

    fn status(&self) -> ExitStatus {
        if self.report.is_complete() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl Render for DuplicatesOutput {
    fn render(&self, _verbose: bool) {
        let report = &self.report;
        if report.groups.is_empty() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                "No duplicate values found".green()
            );
            return;
        }
        let mut last_path: Option<&str> = None;
        for group in &report.groups {
            if last_path != Some(group.path.as_str()) {
                if last_path.is_some() {
                    println!();
                }
                println!("{}", group.path.bold());
                last_path = Some(&group.path);
            }
            println!("  [{}] \"{}\"", group.locales.join(", "), group.value);
        }
        println!();
        println!(
            "{} duplicate value(s) across {} key(s)",
            report.groups.len(),
            report.total_paths()
        );
    }

    fn status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}

impl Render for UsageOutput {
    fn render(&self, verbose: bool) {
        let report = &self.report;
        println!(
            "Scanned {} source {}, {} key(s) in use",
            report.files_scanned,
            if report.files_scanned == 1 { "file" } else { "files" },
            report.used_total()
        );

        if report.missing.is_empty() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("every used key resolves in '{}'", report.base_locale).green()
            );
        } else {
            println!();
            for (file, keys) in &report.missing_by_file {
                println!("{}", file.bold());
                for key in keys {
                    println!("  {} {}", FAILURE_MARK.red(), key);
                }
            }

            let gaps: Vec<_> = report
                .sections
                .iter()
                .filter(|section| section.missing > 0)
                .collect();
            if !gaps.is_empty() {
                println!();
                println!("{}", "Missing keys by section:".bold());
                let width = gaps
                    .iter()
                    .map(|section| section.section.chars().count())
                    .max()
                    .unwrap_or(0);
                for section in &gaps {
                    println!(
                        "  {:<width$}  {} of {} used",
                        section.section,
                        section.missing,
                        section.used,
                        width = width
                    );
                }
            }

            println!();
            println!(
                "{} {} key(s) missing from '{}'",
                FAILURE_MARK.red(),
                report.missing.len(),
                report.base_locale
            );
        }

        print_skip_warning(report.skipped_count, verbose);
    }

    fn status(&self) -> ExitStatus {
        if self.report.missing.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

// ============================================================
// Hardcoded Text Output
// ============================================================

impl Render for HardcodeOutput {
    fn render(&self, verbose: bool) {
        if self.findings.is_empty() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Scanned {} source {} - no hardcoded text found",
                    self.files_scanned,
                    if self.files_scanned == 1 { "file" } else { "files" }
                )
                .green()
            );
        } else {
            render_findings(&self.findings);
            let files: BTreeSet<&str> = self
                .findings
                .iter()
                .map(|finding| finding.file_path.as_str())
                .collect();
            println!(
                "{} {} hardcoded {} in {} {}",
                FAILURE_MARK.red(),
                self.findings.len(),
                if self.findings.len() == 1 { "string" } else { "strings" },
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }

        print_skip_warning(self.skipped_count, verbose);
    }

    fn status(&self) -> ExitStatus {
        if self.findings.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

/// Print findings in cargo-style format to stdout.
pub fn render_findings(findings: &[Finding]) {
    render_findings_to(findings, &mut io::stdout().lock());
}

/// Print findings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn render_findings_to<W: Write>(findings: &[Finding], writer: &mut W) {
    if findings.is_empty() {
        return;
    }

    // Align gutters on the widest line number
    let max_line_width = findings
        .iter()
        .map(|finding| finding.line)
        .max()
        .map(|line| line.to_string().len())
        .unwrap_or(1);

    for finding in findings {
        print_finding(finding, writer, max_line_width);
    }
}

fn print_finding<W: Write>(finding: &Finding, writer: &mut W, max_line_width: usize) {
    let severity_str = match finding.severity {
        Severity::High => "high".bold().red(),
        Severity::Medium => "medium".bold().yellow(),
        Severity::Low => "low".bold().cyan(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        finding.text,
        format!("hardcoded-{}", finding.category).dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        finding.file_path,
        finding.line,
        finding.col
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        finding.line.to_string().blue(),
        "|".blue(),
        finding.source_line,
        width = max_line_width
    );

    // Carets under the flagged text (col is 1-based, counted in chars)
    let prefix: String = finding
        .source_line
        .chars()
        .take(finding.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let caret = "^".repeat(UnicodeWidthStr::width(finding.text.as_str()).max(1));
    let caret_colored = match finding.severity {
        Severity::High => caret.red(),
        _ => caret.yellow(),
    };
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_colored,
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(writer); // Empty line between findings
}

// ============================================================
// Init Output
// ============================================================

impl Render for InitOutput {
    fn render(&self, _verbose: bool) {
        if self.created {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        } else {
            eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        }
    }

    fn status(&self) -> ExitStatus {
        if self.created {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

// ============================================================
// Tests
// ============================================================
