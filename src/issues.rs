//! Finding types for hardcoded-text scan results.
//!
//! Each finding is self-contained: location, the flagged text, the full
//! source line for context display, and the inferred classification.

use std::fmt;

// ============================================================
// Severity and Category
// ============================================================

/// How urgently a finding deserves translation.
///
/// Declaration order doubles as report order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// Kind of UI text, inferred from cues on the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Title,
    Placeholder,
    Button,
    Label,
    Message,
    Description,
    Text,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Title => write!(f, "title"),
            Category::Placeholder => write!(f, "placeholder"),
            Category::Button => write!(f, "button"),
            Category::Label => write!(f, "label"),
            Category::Message => write!(f, "message"),
            Category::Description => write!(f, "description"),
            Category::Text => write!(f, "text"),
        }
    }
}

// ============================================================
// Finding
// ============================================================

/// One hardcoded string flagged by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path relative to the scanned source root.
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the flagged text, counted in characters.
    pub col: usize,
    /// The flagged text, trimmed.
    pub text: String,
    /// The untrimmed source line, for context display.
    pub source_line: String,
    pub category: Category,
    pub severity: Severity,
}

impl Ord for Finding {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
