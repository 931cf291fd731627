use std::process::ExitCode;

/// Process exit status of a locgen run.
///
/// Only a generation run that started and then failed maps to `Failure`, so
/// build scripts can tell a broken catalog or unwritable output apart from a
/// misconfigured invocation, which is `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every locale file was written, or the config file was created.
    Success,
    /// The catalog was missing, could not be loaded, or a locale file could
    /// not be written. Files written before the failure are kept.
    Failure,
    /// Settings or arguments were rejected before generation started, or
    /// `init` found an existing config file.
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
