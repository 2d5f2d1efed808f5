use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): the command ran; gate commands found nothing to fix
/// - `Failure` (1): a gate command found problems, or a write was not applied
/// - `Error` (2): the command itself failed (bad config, invalid key path, I/O)
///
/// Read-only queries such as `get` and `locales` report absence through their
/// output and still exit 0, so they stay safe to use in shell pipelines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
