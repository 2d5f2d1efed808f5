use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::CommandResult;
use super::commands::{analyze, hardcode, init, store};

/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's output and any store warnings
/// - `Err` if the command fails outright (e.g., bad key path, unreadable file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Get(cmd)) => store::get(cmd),
        Some(Command::Set(cmd)) => store::set(cmd),
        Some(Command::SetMultiple(cmd)) => store::set_multiple(cmd),
        Some(Command::GetAll(cmd)) => store::get_all(cmd),
        Some(Command::Has(cmd)) => store::has(cmd),
        Some(Command::Missing(cmd)) => store::missing(cmd),
        Some(Command::Copy(cmd)) => store::copy(cmd),
        Some(Command::Merge(cmd)) => store::merge(cmd),
        Some(Command::Locales(cmd)) => store::locales(cmd),
        Some(Command::Stats(cmd)) => analyze::stats(cmd),
        Some(Command::Check(cmd)) => analyze::check(cmd),
        Some(Command::Duplicates(cmd)) => analyze::duplicates(cmd),
        Some(Command::MissingTranslations(cmd)) => analyze::missing_translations(cmd),
        Some(Command::HardcodeCheck(cmd)) => hardcode::hardcode_check(cmd),
        Some(Command::Init) => init::init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
