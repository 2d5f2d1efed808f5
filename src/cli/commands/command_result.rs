use enum_dispatch::enum_dispatch;
use serde_json::{Map, Value};

use super::super::exit_status::ExitStatus;
use crate::core::{SetOutcome, StoreWarning};
use crate::issues::Finding;
use crate::rules::completeness::CompletenessReport;
use crate::rules::duplicates::DuplicateReport;
use crate::rules::usage::CrossCheckReport;

/// Result of running one lingo command.
pub struct CommandResult {
    pub output: CommandOutput,
    /// Non-fatal conditions met along the way, printed to stderr.
    pub warnings: Vec<StoreWarning>,
}

impl CommandResult {
    pub fn status(&self) -> ExitStatus {
        self.output.status()
    }
}

// ============================================================
// Render Trait
// ============================================================

/// Trait for command outputs that can be reported to the terminal.
///
/// Implemented by every output type to provide a consistent interface for
/// the CLI layer. Uses `enum_dispatch` for zero-cost dispatch on the
/// `CommandOutput` enum.
#[enum_dispatch]
pub trait Render {
    /// Print the output to stdout (error lines go to stderr).
    fn render(&self, verbose: bool);

    /// Exit status this output maps to.
    fn status(&self) -> ExitStatus;
}

/// Everything a lingo command can produce.
#[enum_dispatch(Render)]
#[derive(Debug)]
pub enum CommandOutput {
    Value(ValueOutput),
    Has(HasOutput),
    Set(SetOutput),
    BatchSet(BatchSetOutput),
    Merge(MergeOutput),
    GetAll(GetAllOutput),
    Missing(MissingOutput),
    Copy(CopyOutput),
    Locales(LocalesOutput),
    Stats(StatsOutput),
    Check(CheckOutput),
    Duplicates(DuplicatesOutput),
    Usage(UsageOutput),
    Hardcode(HardcodeOutput),
    Init(InitOutput),
}

// ============================================================
// Output Types
// ============================================================

/// One value read from one locale.
#[derive(Debug)]
pub struct ValueOutput {
    pub locale: String,
    pub key: String,
    pub value: Option<Value>,
}

#[derive(Debug)]
pub struct HasOutput {
    pub present: bool,
}

/// One value written to one locale.
#[derive(Debug)]
pub struct SetOutput {
    pub locale: String,
    pub key: String,
    pub outcome: SetOutcome,
}

/// One key written across several locales.
#[derive(Debug)]
pub struct BatchSetOutput {
    pub key: String,
    pub outcomes: Vec<(String, SetOutcome)>,
}

/// A file of key/value pairs merged into one locale.
#[derive(Debug)]
pub struct MergeOutput {
    pub locale: String,
    pub outcomes: Vec<(String, SetOutcome)>,
}

/// One key's value across every locale that has it.
#[derive(Debug)]
pub struct GetAllOutput {
    pub key: String,
    pub values: Map<String, Value>,
}

/// Locales where one key has no usable value.
#[derive(Debug)]
pub struct MissingOutput {
    pub key: String,
    pub locales: Vec<String>,
}

/// A value copied from a source locale into target locales.
#[derive(Debug)]
pub struct CopyOutput {
    pub source: String,
    pub key: String,
    /// None when the source locale has no usable value at the key.
    pub value: Option<Value>,
    pub outcomes: Vec<(String, SetOutcome)>,
}

#[derive(Debug)]
pub struct LocalesOutput {
    pub locales: Vec<String>,
}

#[derive(Debug)]
pub struct StatsRow {
    pub locale: String,
    /// The locale's own leaf key count.
    pub keys: usize,
    /// Coverage of the base locale's keys, in percent.
    pub coverage: f64,
    pub is_base: bool,
}

#[derive(Debug)]
pub struct StatsOutput {
    pub base_locale: String,
    pub rows: Vec<StatsRow>,
}

#[derive(Debug)]
pub struct CheckOutput {
    pub report: CompletenessReport,
    /// List every missing key per locale instead of just counts.
    pub detailed: bool,
}

#[derive(Debug)]
pub struct DuplicatesOutput {
    pub report: DuplicateReport,
}

#[derive(Debug)]
pub struct UsageOutput {
    pub report: CrossCheckReport,
}

#[derive(Debug)]
pub struct HardcodeOutput {
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitOutput {
    pub created: bool,
}
