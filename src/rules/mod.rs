//! Analysis rules over locale data and project sources.
//!
//! Each rule is a function that takes the inputs it needs (a store, a source
//! tree, scan options) and returns a report struct; rendering happens in the
//! CLI layer.
//!
//! ## Module Structure
//!
//! - `helpers`: Source-tree walking shared by the scanning rules
//! - `completeness`: Per-locale coverage against the base locale
//! - `duplicates`: Identical values reused across keys within a locale
//! - `usage`: Translation keys referenced by sources vs. keys that resolve
//! - `hardcoded`: User-facing string literals that bypass translation

pub mod completeness;
pub mod duplicates;
pub mod hardcoded;
pub mod helpers;
pub mod usage;

pub use completeness::detect_base_locale;
