//! Path sandbox for the file-touching commands.
//!
//! `fs wr`, `fs rd`, `fs rm` and `fs d mk|rm` only ever address entries below
//! the current working directory. `fs cd` does its own resolution and is not
//! routed through here.

use crate::error::ShellError;
use crate::path::{self, is_separator, DrivePath};

/// Resolve `segment` against `cwd`, refusing anything that could leave it.
///
/// Rejected: empty or blank segments, any `..`, any drive separator `:`, and
/// segments starting with `\` or `/`.
pub fn safe_path(cwd: &DrivePath, segment: &str) -> Result<String, ShellError> {
    if segment.trim().is_empty()
        || segment.contains("..")
        || segment.contains(':')
        || segment.starts_with(is_separator)
    {
        log::debug!("rejected path segment {:?}", segment);
        return Err(ShellError::InvalidPath);
    }

    Ok(path::join(&cwd.to_string(), segment))
}
