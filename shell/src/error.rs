//! Error types surfaced at the command boundary.
//!
//! Every error is local to a single command line: the dispatcher prints it on
//! the console and the session carries on.

use core::fmt;

/// What a missing path was expected to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "File"),
            EntryKind::Directory => write!(f, "Directory"),
        }
    }
}

/// Errors reported by the command interpreter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// The input line was empty or only whitespace.
    #[error("No command specified.")]
    EmptyInput,
    /// The command (or sub-command) token is not part of the command set.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// Too few tokens; carries the usage hint shown to the user.
    #[error("No arguments specified. Use \"{0}\"")]
    MissingArguments(&'static str),
    /// Empty, traversing or absolute path segment.
    #[error("Invalid path specified.")]
    InvalidPath,
    #[error("{kind} not found: {name} in {cwd}")]
    NotFound {
        kind: EntryKind,
        name: String,
        cwd: String,
    },
    /// A file-system service call failed; `message` is the service's own text.
    #[error("Failed to {action}: {message}")]
    OperationFailed {
        action: &'static str,
        message: String,
    },
}

impl ShellError {
    pub(crate) fn not_found(kind: EntryKind, name: &str, cwd: impl fmt::Display) -> Self {
        ShellError::NotFound {
            kind,
            name: String::from(name),
            cwd: cwd.to_string(),
        }
    }

    pub(crate) fn failed(action: &'static str, err: impl fmt::Display) -> Self {
        ShellError::OperationFailed {
            action,
            message: err.to_string(),
        }
    }
}

/// Errors returned by [`crate::fs::FileSystem`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    #[error("path not found: {0}")]
    NotFound(String),
    #[error("path already exists: {0}")]
    AlreadyExists(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("not enough free space ({needed} bytes needed, {available} available)")]
    NoSpace { needed: u64, available: u64 },
    #[error("{0}")]
    Io(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::Io(err.to_string())
    }
}
