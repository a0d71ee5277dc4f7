use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but reported problems (malformed declarations,
///   unresolved id, existing config)
/// - `Error` (2): Command failed (unreadable file, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but reported problems.
    Failure,
    /// Command failed due to a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
