//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Lingo
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `get` / `set` / `has`: single-value access in one locale
//! - `set-multiple` / `get-all` / `missing` / `copy`: one key across locales
//! - `merge`: bulk import of key/value pairs into one locale
//! - `locales` / `stats` / `check` / `duplicates`: locale file analysis
//! - `missing-translations`: source keys cross-checked against the base locale
//! - `hardcode-check`: untranslated user-facing text in source files
//! - `init`: initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Set(cmd)) => cmd.common.verbose,
            Some(Command::SetMultiple(cmd)) => cmd.common.verbose,
            Some(Command::GetAll(cmd)) => cmd.common.verbose,
            Some(Command::Has(cmd)) => cmd.common.verbose,
            Some(Command::Missing(cmd)) => cmd.common.verbose,
            Some(Command::Copy(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Duplicates(cmd)) => cmd.common.verbose,
            Some(Command::MissingTranslations(cmd)) => cmd.common.verbose,
            Some(Command::HardcodeCheck(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Base locale to measure against (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Locale files directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Locale to read from
    pub locale: String,

    /// Dot-separated key path
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Locale to write to
    pub locale: String,

    /// Dot-separated key path
    pub key: String,

    /// Value to store; parsed as JSON, falling back to a plain string
    pub value: String,

    /// Keep the existing value if the key is already set
    #[arg(long)]
    pub skip_if_exists: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetMultipleCommand {
    /// Dot-separated key path
    pub key: String,

    /// locale=value pairs, e.g. en=Hello fr=Bonjour
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Keep existing values where the key is already set
    #[arg(long)]
    pub skip_if_exists: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetAllCommand {
    /// Dot-separated key path
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HasCommand {
    /// Locale to check
    pub locale: String,

    /// Dot-separated key path
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    /// Dot-separated key path
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CopyCommand {
    /// Locale to copy from
    pub source: String,

    /// Dot-separated key path
    pub key: String,

    /// Target locale (default: every other locale)
    /// Can be specified multiple times: --to fr --to ja
    #[arg(long = "to")]
    pub to: Vec<String>,

    /// Keep existing values where the key is already set
    #[arg(long)]
    pub skip_if_exists: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Locale to merge into
    pub locale: String,

    /// JSON file mapping dot-separated key paths to values
    pub file: PathBuf,

    /// Keep existing values where a key is already set
    #[arg(long)]
    pub skip_if_exists: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// List every missing key per locale
    #[arg(long)]
    pub detailed: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DuplicatesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissingTranslationsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HardcodeCheckCommand {
    /// File extensions to scan (default: from config)
    /// Can be specified multiple times: --ext vue --ext ts
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Also scan comment lines
    #[arg(long)]
    pub include_comments: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read one translation value from a locale
    Get(GetCommand),
    /// Write one translation value, creating intermediate objects as needed
    Set(SetCommand),
    /// Write one key across several locales at once
    SetMultiple(SetMultipleCommand),
    /// Show one key's value in every locale that has it
    GetAll(GetAllCommand),
    /// Check whether a key has a usable value in a locale
    Has(HasCommand),
    /// List locales where a key has no usable value
    Missing(MissingCommand),
    /// Copy a key's value from one locale into others
    Copy(CopyCommand),
    /// Merge a JSON file of key/value pairs into a locale
    Merge(MergeCommand),
    /// List the locales present in the locales directory
    Locales(LocalesCommand),
    /// Show per-locale key counts and coverage
    Stats(StatsCommand),
    /// Check every locale for completeness against the base locale
    Check(CheckCommand),
    /// Find identical values stored under multiple keys
    Duplicates(DuplicatesCommand),
    /// Cross-check keys used in source code against the base locale
    MissingTranslations(MissingTranslationsCommand),
    /// Scan source files for hardcoded user-facing text
    HardcodeCheck(HardcodeCheckCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
