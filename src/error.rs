//! Error types for catalog generation.
//!
//! Every failure is terminal for a run: nothing is retried and no partial
//! catalog is produced.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input directory has no `project.godot` directly inside it.
    #[error("Invalid input path: project.godot not found in '{}'", root.display())]
    InvalidProject { root: PathBuf },

    /// The project tree could not be traversed.
    #[error("Failed to walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A discovered file could not be opened or decoded as UTF-8 text.
    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog could not be written to its destination.
    #[error("Failed to write catalog '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A field name could not be turned into a line pattern.
    #[error("Invalid field name '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The project configuration file is malformed or contradictory.
    #[error("Invalid configuration in '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl GenerateError {
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error is about the input not being a Godot project,
    /// as opposed to an I/O or configuration failure.
    pub fn is_invalid_project(&self) -> bool {
        matches!(self, Self::InvalidProject { .. })
    }
}
