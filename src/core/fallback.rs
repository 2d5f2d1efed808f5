//! Best-effort extraction of a locale object out of a JS module.
//!
//! Handles the plain-literal shape (`export default { ... }` or
//! `module.exports = { ... }`) by rewriting the literal into JSON. Anything
//! dynamic (template literals, identifiers, spreads, computed values) makes
//! the extraction give up and return `None`; callers fall back to an empty
//! document and warn.

use serde_json::{Map, Value};

use crate::core::document::LocaleDocument;

const EXPORT_MARKERS: [&str; 2] = ["export default", "module.exports"];

/// Extract the exported object literal from JS module source.
pub fn extract_object_literal(content: &str) -> Option<LocaleDocument> {
    let open = brace_after_marker(content)?;
    let literal = balanced_slice(content, open)?;
    let json = rewrite_to_json(literal)?;
    let root: Map<String, Value> = serde_json::from_str(&json).ok()?;
    Some(LocaleDocument::from_root(root))
}

/// Byte offset of the `{` opening the exported literal, if the export
/// is a direct object literal.
fn brace_after_marker(content: &str) -> Option<usize> {
    for marker in EXPORT_MARKERS {
        let Some(pos) = content.find(marker) else {
            continue;
        };
        let rest = &content[pos + marker.len()..];
        for (offset, c) in rest.char_indices() {
            if c == '{' {
                return Some(pos + marker.len() + offset);
            }
            if !c.is_whitespace() && c != '=' {
                break;
            }
        }
    }
    None
}

/// Slice from the opening brace to its balanced closing brace, skipping
/// braces inside quoted strings. Template literals abort the extraction.
fn balanced_slice(content: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in content[open..].char_indices() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => in_string = Some(c),
            '`' => return None,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[open..open + idx + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Rewrite a JS object literal into JSON text.
///
/// Converts single-quoted strings, quotes bare keys, strips comments and
/// trailing commas. Returns `None` on any construct that has no static JSON
/// equivalent.
fn rewrite_to_json(source: &str) -> Option<String> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '/' => match chars.get(i + 1) {
                Some('/') => {
                    while i < chars.len() && chars[i] != '\n' {
                        i += 1;
                    }
                }
                Some('*') => {
                    i += 2;
                    while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
                        i += 1;
                    }
                    i += 2;
                }
                _ => return None,
            },
            '"' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    if c == '\\' {
                        out.push('\\');
                        if let Some(&next) = chars.get(i + 1) {
                            out.push(next);
                        }
                        i += 2;
                        continue;
                    }
                    out.push(c);
                    i += 1;
                    if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    if c == '\\' {
                        match chars.get(i + 1) {
                            // \' needs no escape once the string is double-quoted
                            Some('\'') => out.push('\''),
                            Some(&next) => {
                                out.push('\\');
                                out.push(next);
                            }
                            None => {}
                        }
                        i += 2;
                        continue;
                    }
                    if c == '\'' {
                        i += 1;
                        break;
                    }
                    if c == '"' {
                        out.push('\\');
                        out.push('"');
                        i += 1;
                        continue;
                    }
                    out.push(c);
                    i += 1;
                }
                out.push('"');
            }
            '`' => return None,
            c if c == '_' || c == '$' || c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len()
                    && (chars[i] == '_' || chars[i] == '$' || chars[i].is_ascii_alphanumeric())
                {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if chars.get(j) == Some(&':') {
                    // bare object key
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                } else if word == "true" || word == "false" || word == "null" {
                    out.push_str(&word);
                } else {
                    // identifier value: a variable or call, not representable
                    return None;
                }
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if !matches!(chars.get(j), Some('}') | Some(']')) {
                    out.push(',');
                }
                i += 1;
            }
            c if c.is_whitespace()
                || c.is_ascii_digit()
                || matches!(c, '{' | '}' | '[' | ']' | ':' | '.' | '-') =>
            {
                out.push(c);
                i += 1;
            }
            _ => return None,
        }
    }

    Some(out)
}
