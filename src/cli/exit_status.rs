use std::process::ExitCode;

use crate::error::GenerateError;

/// Exit status for the gopot binary.
///
/// - `Success` (0): catalog written
/// - `Failure` (1): input directory is not a Godot project
/// - `Error` (2): any other failure (I/O, configuration)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Catalog written.
    Success,
    /// Input directory is not a Godot project.
    Failure,
    /// Command failed due to an I/O or configuration error.
    Error,
}

impl ExitStatus {
    /// Pick the exit status for a failed run.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GenerateError>() {
            Some(e) if e.is_invalid_project() => ExitStatus::Failure,
            _ => ExitStatus::Error,
        }
    }
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
