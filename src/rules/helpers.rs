//! Source tree walking shared by the scanning rules.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Directory names never worth scanning.
pub const EXCLUDED_DIRS: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".nuxt",
    ".output",
    "coverage",
];

/// Files discovered under a source root.
#[derive(Debug, Default)]
pub struct SourceScan {
    /// Root-relative paths, sorted for deterministic reports.
    pub files: Vec<PathBuf>,
    /// Files dropped by ignore patterns.
    pub skipped_count: usize,
}

/// Walk the tree under `root` collecting files with one of the wanted
/// extensions.
///
/// `ignores` entries containing glob metacharacters are matched as globs
/// against the root-relative path; everything else is a literal fragment
/// match.
pub fn collect_source_files(
    root: &Path,
    extensions: &[String],
    ignores: &[String],
    verbose: bool,
) -> SourceScan {
    let mut scan = SourceScan::default();
    let (patterns, literals) = split_ignores(ignores);

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && EXCLUDED_DIRS.contains(&name.as_ref()))
    });

    for entry in walker.flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !extensions.iter().any(|wanted| wanted == ext) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative_str = relative.to_string_lossy();
        if is_ignored(&relative_str, &patterns, &literals) {
            scan.skipped_count += 1;
            if verbose {
                eprintln!("{}", format!("skipped {}", relative_str).dimmed());
            }
            continue;
        }
        scan.files.push(relative.to_path_buf());
    }

    scan.files.sort();
    scan
}

/// Read one scanned file, reporting failures only in verbose mode.
pub fn read_source_file(root: &Path, relative: &Path, verbose: bool) -> Option<String> {
    match std::fs::read_to_string(root.join(relative)) {
        Ok(content) => Some(content),
        Err(err) => {
            if verbose {
                eprintln!(
                    "{} cannot read {}: {}",
                    "warning:".yellow().bold(),
                    relative.display(),
                    err
                );
            }
            None
        }
    }
}

fn split_ignores(ignores: &[String]) -> (Vec<Pattern>, Vec<String>) {
    let mut patterns = Vec::new();
    let mut literals = Vec::new();
    for ignore in ignores {
        if ignore.contains(['*', '?', '[']) {
            if let Ok(pattern) = Pattern::new(ignore) {
                patterns.push(pattern);
                continue;
            }
        }
        literals.push(ignore.clone());
    }
    (patterns, literals)
}

fn is_ignored(relative: &str, patterns: &[Pattern], literals: &[String]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(relative))
        || literals.iter().any(|literal| relative.contains(literal.as_str()))
}
