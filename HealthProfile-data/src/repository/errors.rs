use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A name or measurement violates the record invariants
    #[error("Invalid input value: {0}")]
    Validation(String),

    /// No record carries the requested name
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The profiles file could not be opened for reading or writing
    #[error("Error opening file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The profiles file was opened but writing to it failed
    #[error("Error writing file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
