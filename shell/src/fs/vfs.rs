//! Virtual File System Abstraction
//!
//! The interpreter never touches storage directly. Every side effect goes
//! through this trait, addressed by absolute drive paths (`0:\docs\a.txt`).
//! Implementations must accept both `\` and `/` inside a path and ignore `.`
//! components.

use crate::constants::DRIVE_ROOT;
use crate::error::FsError;
use crate::path::{components, join};

/// Abstract Filesystem Interface
///
/// Implemented by the in-memory drive (`MemFs`) and by host-backed drives.
pub trait FileSystem {
    /// Check if a directory exists
    fn dir_exists(&self, path: &str) -> bool;

    /// Check if a regular file exists
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory; its parent must already exist
    fn create_dir(&mut self, path: &str) -> Result<(), FsError>;

    /// Create a directory together with any missing parents
    fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let mut current = String::from(DRIVE_ROOT);
        for part in components(path) {
            current = join(&current, part);
            if !self.dir_exists(&current) {
                self.create_dir(&current)?;
            }
        }
        Ok(())
    }

    /// Remove a directory and everything below it
    fn remove_dir_all(&mut self, path: &str) -> Result<(), FsError>;

    /// Absolute paths of the directories directly inside `path`, sorted
    fn list_dirs(&self, path: &str) -> Result<Vec<String>, FsError>;

    /// Absolute paths of the files directly inside `path`, sorted
    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError>;

    /// Read a whole file as text
    fn read_to_string(&self, path: &str) -> Result<String, FsError>;

    /// Write data to a file (creates if doesn't exist, truncates otherwise)
    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), FsError>;

    /// Remove a regular file
    fn remove_file(&mut self, path: &str) -> Result<(), FsError>;

    /// Bytes still available on the volume holding `path`
    fn free_space(&self, path: &str) -> Result<u64, FsError>;

    /// Erase the whole drive, leaving an empty root
    fn format(&mut self) -> Result<(), FsError>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Boxed drives (backend chosen at runtime)
// ═══════════════════════════════════════════════════════════════════════════════

impl<T: FileSystem + ?Sized> FileSystem for Box<T> {
    fn dir_exists(&self, path: &str) -> bool {
        (**self).dir_exists(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn create_dir(&mut self, path: &str) -> Result<(), FsError> {
        (**self).create_dir(path)
    }

    fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        (**self).create_dir_all(path)
    }

    fn remove_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        (**self).remove_dir_all(path)
    }

    fn list_dirs(&self, path: &str) -> Result<Vec<String>, FsError> {
        (**self).list_dirs(path)
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError> {
        (**self).list_files(path)
    }

    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        (**self).read_to_string(path)
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), FsError> {
        (**self).write(path, data)
    }

    fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        (**self).remove_file(path)
    }

    fn free_space(&self, path: &str) -> Result<u64, FsError> {
        (**self).free_space(path)
    }

    fn format(&mut self) -> Result<(), FsError> {
        (**self).format()
    }
}
