//! Line tokenizer.
//!
//! Splits on the ASCII space only. There is no quoting or escaping; tabs and
//! other characters stay inside their token.

use crate::error::ShellError;

/// Split `line` into its non-empty space-delimited tokens.
///
/// Lines that are empty or made only of whitespace are rejected before any
/// splitting happens.
pub fn tokenize(line: &str) -> Result<Vec<&str>, ShellError> {
    if line.trim().is_empty() {
        return Err(ShellError::EmptyInput);
    }

    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
    log::trace!("tokenized {:?} into {} tokens", line, tokens.len());
    Ok(tokens)
}
