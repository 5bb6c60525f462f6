//! In-memory drive
//!
//! A `FileSystem` implementation holding the whole tree in memory with a
//! fixed byte capacity. Used as the default drive and by the test suites.

use std::collections::{BTreeMap, BTreeSet};

use super::vfs::FileSystem;
use crate::constants::{BYTES_PER_MB, DEFAULT_CAPACITY_MB, DRIVE_LABEL, SEPARATOR};
use crate::error::FsError;
use crate::path::components;

/// In-memory drive
///
/// Entries are keyed by their normalized components joined with `\`; the root
/// directory is the empty key.
pub struct MemFs {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    capacity: u64,
}

impl MemFs {
    /// Create an empty drive holding at most `capacity` bytes of file data
    pub fn with_capacity(capacity: u64) -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(String::new());
        Self {
            dirs,
            files: BTreeMap::new(),
            capacity,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_MB * BYTES_PER_MB)
    }

    /// Bytes taken by file contents
    pub fn used(&self) -> u64 {
        self.files.values().map(|data| data.len() as u64).sum()
    }

    fn key(path: &str) -> String {
        components(path).join("\\")
    }

    fn parent_key(key: &str) -> &str {
        match key.rfind(SEPARATOR) {
            Some(pos) => &key[..pos],
            None => "",
        }
    }

    fn absolute(key: &str) -> String {
        format!("{}{}{}", DRIVE_LABEL, SEPARATOR, key)
    }

    fn is_below(key: &str, dir: &str) -> bool {
        key.len() > dir.len() && key.starts_with(dir) && key[dir.len()..].starts_with(SEPARATOR)
    }

    fn require_dir(&self, key: &str, path: &str) -> Result<(), FsError> {
        if self.dirs.contains(key) {
            Ok(())
        } else if self.files.contains_key(key) {
            Err(FsError::NotADirectory(String::from(path)))
        } else {
            Err(FsError::NotFound(String::from(path)))
        }
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFs {
    fn dir_exists(&self, path: &str) -> bool {
        self.dirs.contains(&Self::key(path))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(&Self::key(path))
    }

    fn create_dir(&mut self, path: &str) -> Result<(), FsError> {
        let key = Self::key(path);
        if self.dirs.contains(&key) || self.files.contains_key(&key) {
            return Err(FsError::AlreadyExists(String::from(path)));
        }
        let parent = Self::parent_key(&key);
        self.require_dir(parent, &Self::absolute(parent))?;

        self.dirs.insert(key);
        Ok(())
    }

    fn remove_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let key = Self::key(path);
        self.require_dir(&key, path)?;
        if key.is_empty() {
            return Err(FsError::Io(String::from("cannot remove the drive root")));
        }

        self.dirs.retain(|d| *d != key && !Self::is_below(d, &key));
        self.files.retain(|f, _| !Self::is_below(f, &key));
        Ok(())
    }

    fn list_dirs(&self, path: &str) -> Result<Vec<String>, FsError> {
        let key = Self::key(path);
        self.require_dir(&key, path)?;

        Ok(self
            .dirs
            .iter()
            .filter(|d| !d.is_empty() && Self::parent_key(d) == key)
            .map(|d| Self::absolute(d))
            .collect())
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError> {
        let key = Self::key(path);
        self.require_dir(&key, path)?;

        Ok(self
            .files
            .keys()
            .filter(|f| Self::parent_key(f) == key)
            .map(|f| Self::absolute(f))
            .collect())
    }

    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        let key = Self::key(path);
        match self.files.get(&key) {
            Some(data) => Ok(String::from_utf8_lossy(data).into_owned()),
            None if self.dirs.contains(&key) => Err(FsError::IsADirectory(String::from(path))),
            None => Err(FsError::NotFound(String::from(path))),
        }
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), FsError> {
        let key = Self::key(path);
        if self.dirs.contains(&key) {
            return Err(FsError::IsADirectory(String::from(path)));
        }
        let parent = Self::parent_key(&key);
        self.require_dir(parent, &Self::absolute(parent))?;

        let existing = self.files.get(&key).map_or(0, |d| d.len() as u64);
        let available = self.capacity.saturating_sub(self.used() - existing);
        let needed = data.len() as u64;
        if needed > available {
            return Err(FsError::NoSpace { needed, available });
        }

        self.files.insert(key, data.to_vec());
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        let key = Self::key(path);
        if self.files.remove(&key).is_none() {
            return Err(FsError::NotFound(String::from(path)));
        }
        Ok(())
    }

    fn free_space(&self, path: &str) -> Result<u64, FsError> {
        let key = Self::key(path);
        self.require_dir(&key, path)?;
        Ok(self.capacity.saturating_sub(self.used()))
    }

    fn format(&mut self) -> Result<(), FsError> {
        self.files.clear();
        self.dirs.clear();
        self.dirs.insert(String::new());
        Ok(())
    }
}
