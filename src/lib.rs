//! Lingo - translation file manager for Vue i18n projects
//!
//! Lingo is a CLI tool and library for managing translations in Vue projects.
//! It reads and writes nested keys across per-locale JSON files, measures
//! completeness against a base locale, cross-checks the keys used in source
//! code, and flags hardcoded text that should be translated.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale store (documents, key paths, reads and writes)
//! - `issues`: Hardcoded-text finding types
//! - `rules`: Completeness, duplicate, and usage analysis
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
