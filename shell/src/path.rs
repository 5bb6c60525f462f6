//! Drive path arithmetic.
//!
//! Paths look like `0:\docs\notes.txt`. Both `\` and `/` are accepted as
//! separators on input; `\` is always used on output.

use core::fmt;

use crate::constants::{ALT_SEPARATOR, DRIVE_LABEL, SEPARATOR};

pub fn is_separator(c: char) -> bool {
    c == SEPARATOR || c == ALT_SEPARATOR
}

/// Append `segment` to `base`, inserting a separator only when `base` does
/// not already end with one.
pub fn join(base: &str, segment: &str) -> String {
    let mut joined = String::with_capacity(base.len() + segment.len() + 1);
    joined.push_str(base);
    if !base.ends_with(is_separator) {
        joined.push(SEPARATOR);
    }
    joined.push_str(segment);
    joined
}

/// Normalized components of an absolute drive path, without the drive label.
///
/// Empty and `.` components are dropped and `..` removes the previous
/// component (never going above the root).
pub fn components(path: &str) -> Vec<&str> {
    let rest = match path.find(':') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split(is_separator) {
        match part {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            p => parts.push(p),
        }
    }
    parts
}

/// Strip `dir` plus one separator from the front of `entry`.
///
/// Used to turn absolute listing entries back into names relative to the
/// directory being listed.
pub fn strip_dir_prefix<'a>(entry: &'a str, dir: &str) -> &'a str {
    let dir = dir.trim_end_matches(is_separator);
    match entry.strip_prefix(dir) {
        Some(rest) if rest.starts_with(is_separator) => &rest[1..],
        _ => entry,
    }
}

/// A location on the drive, kept as components.
///
/// `trailing` records whether the rendered form ends with a separator: `cd ..`
/// produces paths like `0:\docs\` while `cd docs` produces `0:\docs`. The root
/// always renders as `0:\`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrivePath {
    drive: String,
    segments: Vec<String>,
    trailing: bool,
}

impl DrivePath {
    pub fn root() -> Self {
        Self {
            drive: String::from(DRIVE_LABEL),
            segments: Vec::new(),
            trailing: true,
        }
    }

    /// Parse an absolute path such as `0:\a\b`. Returns `None` without a
    /// drive label.
    pub fn parse(path: &str) -> Option<Self> {
        let colon = path.find(':')?;
        let drive = &path[..=colon];
        if drive.len() < 2 || drive[..colon].contains(is_separator) {
            return None;
        }

        let segments: Vec<String> = components(path).into_iter().map(String::from).collect();
        let trailing = segments.is_empty() || path.ends_with(is_separator);
        Some(Self {
            drive: String::from(drive),
            segments,
            trailing,
        })
    }

    pub fn drive(&self) -> &str {
        &self.drive
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The enclosing directory, rendered with a trailing separator. `None` at
    /// the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut parent = self.clone();
        parent.segments.pop();
        parent.trailing = true;
        Some(parent)
    }

    /// Descend into `name`, which may itself hold several components.
    ///
    /// `..` components walk back up but stop at the root. The result renders
    /// without a trailing separator unless it is the root.
    pub fn child(&self, name: &str) -> Self {
        let mut next = self.clone();
        for part in name.split(is_separator) {
            match part {
                "" | "." => continue,
                ".." => {
                    next.segments.pop();
                }
                p => next.segments.push(String::from(p)),
            }
        }
        next.trailing = next.segments.is_empty();
        next
    }

    /// True when `self` lies strictly below `other`.
    #[cfg(test)]
    pub(crate) fn is_descendant_of(&self, other: &DrivePath) -> bool {
        self.drive == other.drive
            && self.segments.len() > other.segments.len()
            && self.segments.starts_with(&other.segments)
    }
}

impl Default for DrivePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for DrivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.drive, SEPARATOR)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        if self.trailing && !self.segments.is_empty() {
            write!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_separator() {
        assert_eq!(join("0:\\", "a.txt"), "0:\\a.txt");
        assert_eq!(join("0:\\docs", "a.txt"), "0:\\docs\\a.txt");
        assert_eq!(join("0:\\docs\\", "a.txt"), "0:\\docs\\a.txt");
    }

    #[test]
    fn test_components_normalize() {
        assert_eq!(components("0:\\a\\.\\b/c\\"), vec!["a", "b", "c"]);
        assert_eq!(components("0:\\a\\..\\..\\b"), vec!["b"]);
        assert!(components("0:\\").is_empty());
    }

    #[test]
    fn test_strip_dir_prefix() {
        assert_eq!(strip_dir_prefix("0:\\docs\\a.txt", "0:\\docs"), "a.txt");
        assert_eq!(strip_dir_prefix("0:\\docs\\a.txt", "0:\\docs\\"), "a.txt");
        assert_eq!(strip_dir_prefix("0:\\sub", "0:\\"), "sub");
        assert_eq!(strip_dir_prefix("0:\\other\\x", "0:\\docs"), "0:\\other\\x");
    }

    #[test]
    fn test_render_trailing_convention() {
        let root = DrivePath::root();
        assert_eq!(root.to_string(), "0:\\");

        let docs = root.child("docs");
        assert_eq!(docs.to_string(), "0:\\docs");

        let deep = docs.child("notes");
        assert_eq!(deep.parent().unwrap().to_string(), "0:\\docs\\");
        assert_eq!(docs.parent().unwrap().to_string(), "0:\\");
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_child_walks_components() {
        let root = DrivePath::root();
        assert_eq!(root.child("a\\b").to_string(), "0:\\a\\b");
        assert_eq!(root.child("a/b/..").to_string(), "0:\\a");
        assert_eq!(root.child("..\\..").to_string(), "0:\\");
    }

    #[test]
    fn test_parse_roundtrips_rendering() {
        for text in ["0:\\", "0:\\docs", "0:\\docs\\", "0:\\a\\b"] {
            assert_eq!(DrivePath::parse(text).unwrap().to_string(), text);
        }
        assert!(DrivePath::parse("docs").is_none());
    }

    #[test]
    fn test_descendant() {
        let docs = DrivePath::root().child("docs");
        let notes = docs.child("notes");
        assert!(notes.is_descendant_of(&docs));
        assert!(!docs.is_descendant_of(&docs));
        assert!(!docs.is_descendant_of(&notes));
    }
}
