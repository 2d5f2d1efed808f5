//! User-facing string literals that bypass translation.
//!
//! A line-oriented heuristic, not a parser. Each line is classified on its
//! own: lines that already call a translation function are skipped, comment
//! lines are skipped, then candidates are extracted (tag content in markup,
//! quoted literals in scripts), filtered through an exclusion ruleset and a
//! positive user-facing test, and finally classified. Multi-line constructs
//! (a `<pre>` block opened on an earlier line, strings spanning lines) are
//! out of reach by design of the line model.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::issues::{Category, Finding, Severity};
use crate::rules::helpers::{collect_source_files, read_source_file};
use crate::utils::{contains_cjk, contains_latin_or_cjk, has_mixed_case, word_count};

// ============================================================
// Patterns and vocabularies
// ============================================================

/// Lines already delegating to translation, in any calling convention
/// (`t(`, `$t(`, `i18n.t(` with a quoted key).
static I18N_USAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bt\(\s*['"`]"#).unwrap());

/// Text between a closing `>` and the next `<`.
static TAG_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<>]+)<").unwrap());

/// Escape-aware quoted literals.
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap());
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'((?:[^'\\]|\\.)*)'"#).unwrap());
static BACKTICK_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"`((?:[^`\\]|\\.)*)`"#).unwrap());

/// Attribute assignment directly before a candidate: `name=` with no gap.
static ATTR_BEFORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"([\w@:.-]+)=$"#).unwrap());

static NUMERIC_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?(px|em|rem|%|vh|vw|ms|s)?$").unwrap());
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{3,8}$").unwrap());

/// Vue directive and binding markers; tag content starting with one is
/// syntax, not copy.
const DIRECTIVE_MARKERS: [&str; 3] = ["v-", ":", "@"];

const URL_PREFIXES: [&str; 7] = ["http://", "https://", "ws://", "wss://", "mailto:", "tel:", "//"];

const KNOWN_ATTRIBUTES: [&str; 15] = [
    "alt",
    "class",
    "for",
    "href",
    "id",
    "key",
    "name",
    "placeholder",
    "rel",
    "src",
    "style",
    "target",
    "title",
    "type",
    "value",
];

const DOM_EVENTS: [&str; 23] = [
    "blur",
    "change",
    "click",
    "dragend",
    "dragstart",
    "drop",
    "focus",
    "input",
    "keydown",
    "keypress",
    "keyup",
    "load",
    "mousedown",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
    "resize",
    "scroll",
    "submit",
    "touchend",
    "touchmove",
    "touchstart",
];

const HTTP_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Lowercased technical terms that are never user copy on their own.
const TECHNICAL_TERMS: [&str; 32] = [
    "api",
    "axios",
    "base64",
    "css",
    "eslint",
    "false",
    "fixme",
    "guid",
    "html",
    "http",
    "https",
    "js",
    "json",
    "localhost",
    "nan",
    "node",
    "npm",
    "null",
    "regex",
    "router",
    "sql",
    "todo",
    "true",
    "ts",
    "undefined",
    "uri",
    "url",
    "utf-8",
    "uuid",
    "vite",
    "vue",
    "webpack",
];

/// Words common in UI copy; a single-word candidate containing one passes
/// the user-facing test.
const UI_VOCABULARY: [&str; 32] = [
    "add",
    "back",
    "cancel",
    "choose",
    "close",
    "confirm",
    "delete",
    "download",
    "edit",
    "error",
    "failed",
    "loading",
    "login",
    "logout",
    "next",
    "open",
    "please",
    "previous",
    "remove",
    "retry",
    "save",
    "search",
    "select",
    "settings",
    "sign in",
    "sign out",
    "submit",
    "success",
    "upload",
    "view",
    "warning",
    "welcome",
];

// ============================================================
// Scan types
// ============================================================

/// File kinds branch the candidate extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Component markup: candidates sit between tags.
    Markup,
    /// Plain script: candidates are quoted string literals.
    Script,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "vue" | "html" => FileKind::Markup,
            _ => FileKind::Script,
        }
    }
}

/// Tuning knobs for one scan, sourced from config and CLI flags.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    pub include_comments: bool,
    pub min_text_length: usize,
    pub max_text_length: usize,
    pub ignore_texts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct HardcodeScan {
    /// Findings sorted by file, line, column.
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

// ============================================================
// Scanning
// ============================================================

/// Scan every matching file under `root`.
pub fn scan_tree(
    root: &Path,
    options: &ScanOptions,
    ignores: &[String],
    verbose: bool,
) -> HardcodeScan {
    let scan = collect_source_files(root, &options.extensions, ignores, verbose);
    let mut result = HardcodeScan {
        skipped_count: scan.skipped_count,
        ..Default::default()
    };

    for relative in &scan.files {
        let Some(content) = read_source_file(root, relative, verbose) else {
            continue;
        };
        result.files_scanned += 1;
        let kind = relative
            .extension()
            .and_then(|e| e.to_str())
            .map(FileKind::from_extension)
            .unwrap_or(FileKind::Script);
        let file_path = relative.display().to_string();
        result
            .findings
            .extend(scan_file(&file_path, &content, kind, options));
    }

    result.findings.sort();
    result
}

/// Scan one file's content line by line.
pub fn scan_file(
    file_path: &str,
    content: &str,
    kind: FileKind,
    options: &ScanOptions,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;

        if I18N_USAGE.is_match(line) {
            continue;
        }
        if !options.include_comments && is_comment_line(line) {
            continue;
        }

        let candidates = match kind {
            FileKind::Markup => markup_candidates(line),
            FileKind::Script => script_candidates(line),
        };

        for candidate in candidates {
            let text = candidate.text.trim();
            if text.is_empty() {
                continue;
            }
            let length = text.chars().count();
            if length < options.min_text_length || length > options.max_text_length {
                continue;
            }
            if in_code_or_pre(line, candidate.start) {
                continue;
            }
            if is_excluded(text, &options.ignore_texts) {
                continue;
            }
            if !looks_user_facing(text) {
                continue;
            }

            let trim_offset = candidate.text.len() - candidate.text.trim_start().len();
            let byte_start = candidate.start + trim_offset;
            let col = line[..byte_start].chars().count() + 1;
            let category = infer_category(line);
            let severity = infer_severity(text, category, kind == FileKind::Markup);

            findings.push(Finding {
                file_path: file_path.to_string(),
                line: line_no,
                col,
                text: text.to_string(),
                source_line: line.to_string(),
                category,
                severity,
            });
        }
    }
    findings
}

struct Candidate {
    /// Raw extracted text, untrimmed.
    text: String,
    /// Byte offset of the raw text within the line.
    start: usize,
}

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with("<!--")
}

fn markup_candidates(line: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    for capture in TAG_TEXT.captures_iter(line) {
        let Some(m) = capture.get(1) else {
            continue;
        };
        let trimmed = m.as_str().trim();
        // Interpolations render dynamic values, not hardcoded copy
        if trimmed.contains("{{") || trimmed.contains("}}") {
            continue;
        }
        if DIRECTIVE_MARKERS
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            continue;
        }
        out.push(Candidate {
            text: m.as_str().to_string(),
            start: m.start(),
        });
    }
    out
}

fn script_candidates(line: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    for pattern in [&DOUBLE_QUOTED, &SINGLE_QUOTED, &BACKTICK_QUOTED] {
        for capture in pattern.captures_iter(line) {
            let (Some(whole), Some(m)) = (capture.get(0), capture.get(1)) else {
                continue;
            };
            if in_attribute_context(line, whole.start()) {
                continue;
            }
            out.push(Candidate {
                text: m.as_str().to_string(),
                start: m.start(),
            });
        }
    }
    out.sort_by_key(|candidate| candidate.start);
    out
}

/// Whether a quoted literal at `quote_start` is an attribute value rather
/// than copy: inside an unclosed open tag, or directly after `name=`.
fn in_attribute_context(line: &str, quote_start: usize) -> bool {
    let before = &line[..quote_start];

    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) if open > close => return true,
        (Some(_), None) => return true,
        _ => {}
    }

    let Some(capture) = ATTR_BEFORE.captures(before) else {
        return false;
    };
    let Some(token) = capture.get(1) else {
        return false;
    };
    let token = token.as_str();
    KNOWN_ATTRIBUTES.contains(&token)
        || token.starts_with("v-")
        || token.starts_with(':')
        || token.starts_with('@')
        || token.starts_with("data-")
        || token.starts_with("aria-")
}

/// Same-line `<code>`/`<pre>` suppression: the nearest preceding unmatched
/// opener, whether the region closes later on the line or never closes,
/// puts the candidate inside the region.
fn in_code_or_pre(line: &str, pos: usize) -> bool {
    let before = &line[..pos];
    for tag in ["code", "pre"] {
        let last_open = find_last_open_tag(before, tag);
        let last_close = before.rfind(&format!("</{}>", tag));
        let open_active = match (last_open, last_close) {
            (Some(open), Some(close)) => open > close,
            (Some(_), None) => true,
            _ => false,
        };
        if open_active {
            return true;
        }
    }
    false
}

fn find_last_open_tag(haystack: &str, tag: &str) -> Option<usize> {
    let needle = format!("<{}", tag);
    let mut from = 0;
    let mut found = None;
    while let Some(pos) = haystack[from..].find(&needle) {
        let abs = from + pos;
        // Reject longer tag names sharing the prefix, e.g. <preview>
        let next = haystack[abs + needle.len()..].chars().next();
        if matches!(next, Some('>') | Some(' ') | Some('\t') | Some('/') | None) {
            found = Some(abs);
        }
        from = abs + needle.len();
    }
    found
}

// ============================================================
// Filters
// ============================================================

fn is_excluded(text: &str, ignore_texts: &[String]) -> bool {
    if text.chars().count() <= 1 {
        return true;
    }
    if ignore_texts.iter().any(|ignored| ignored == text) {
        return true;
    }
    let lower = text.to_lowercase();
    if URL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return true;
    }
    is_path_like(text)
        || is_constant_case(text)
        || is_short_camel(text)
        || NUMERIC_VALUE.is_match(text)
        || HEX_COLOR.is_match(text)
        || DOM_EVENTS.contains(&text)
        || HTTP_METHODS.contains(&text)
        || TECHNICAL_TERMS.contains(&lower.as_str())
}

fn is_path_like(text: &str) -> bool {
    text.starts_with('/')
        || text.starts_with("./")
        || text.starts_with("../")
        || (text.contains('/') && !text.contains(' '))
}

fn is_constant_case(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
        && text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Short lower-camel identifiers like `modelValue` read as code, not copy.
fn is_short_camel(text: &str) -> bool {
    if text.chars().count() > 15 {
        return false;
    }
    let Some(first) = text.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && text.chars().all(|c| c.is_ascii_alphanumeric())
        && text.chars().any(|c| c.is_ascii_uppercase())
}

/// Positive test: does the candidate read like copy shown to a person?
fn looks_user_facing(text: &str) -> bool {
    if !contains_latin_or_cjk(text) {
        return false;
    }
    if word_count(text) >= 2 {
        return true;
    }
    if contains_cjk(text) {
        return true;
    }
    let lower = text.to_lowercase();
    if UI_VOCABULARY.iter().any(|term| lower.contains(term)) {
        return true;
    }
    text.chars().count() > 6 && has_mixed_case(text)
}

// ============================================================
// Classification
// ============================================================

fn infer_category(line: &str) -> Category {
    let lower = line.to_lowercase();
    if lower.contains("title") {
        Category::Title
    } else if lower.contains("placeholder") {
        Category::Placeholder
    } else if lower.contains("button") || lower.contains("btn") {
        Category::Button
    } else if lower.contains("label") {
        Category::Label
    } else if lower.contains("message") || lower.contains("msg") {
        Category::Message
    } else if lower.contains("description") || lower.contains("desc") {
        Category::Description
    } else {
        Category::Text
    }
}

fn infer_severity(text: &str, category: Category, markup_content: bool) -> Severity {
    if markup_content || matches!(category, Category::Title | Category::Button | Category::Label) {
        return Severity::High;
    }
    if text.chars().count() > 20 || contains_cjk(text) {
        return Severity::Medium;
    }
    Severity::Low
}
