//! Error handling for beman-new.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for project adaptation.
///
/// Every step returns one of these instead of recovering; the first error
/// aborts the whole run and leaves the working tree as the previous steps
/// left it.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors reported by libgit2
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents errors that occur during README rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while building the template context
    #[error("Serialization error: {0}.")]
    SerdeError(#[from] serde_json::Error),

    /// Represents errors in resolving the command line configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The project root is not a usable git checkout
    #[error("Cannot open git repository at '{path}': {source}. Run beman-new from the root of a git checkout of the exemplar project.")]
    RepositoryError { path: String, source: git2::Error },

    /// An expected file or directory of the exemplar layout is absent
    #[error("'{path}' does not exist. Has this project already been adapted?")]
    MissingPathError { path: String },

    /// A path expected in the index is not tracked
    #[error("'{path}' is not tracked by git.")]
    NotTrackedError { path: String },

    /// The staged tree is identical to HEAD
    #[error("Nothing to commit.")]
    NothingToCommitError,
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
