//! Host-backed drive
//!
//! Maps `0:\` onto a directory of the host file system. The drive has a
//! configured capacity; free space is that capacity minus the bytes stored
//! under the root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use vshell::constants::DRIVE_ROOT;
use vshell::path::{components, join};
use vshell::{FileSystem, FsError};

pub struct HostFs {
    root: PathBuf,
    capacity: u64,
}

impl HostFs {
    /// Open a drive over `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>, capacity: u64) -> io::Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("drive root {} is not a directory", root.display()),
            ));
        }
        let root = root.canonicalize()?;
        log::info!("drive 0: mapped to {} ({} bytes)", root.display(), capacity);
        Ok(Self { root, capacity })
    }

    /// Host location of a drive path.
    ///
    /// Components that could re-anchor the host path (a drive prefix such as
    /// `C:`) have no host location, and neither do paths that a symlink
    /// carries out of the root.
    fn host_path(&self, path: &str) -> Option<PathBuf> {
        let mut host = self.root.clone();
        for part in components(path) {
            if part.contains(':') {
                return None;
            }
            host.push(part);
        }
        if !self.confined(&host) {
            log::warn!("{} resolves outside the drive root", path);
            return None;
        }
        Some(host)
    }

    /// The deepest existing ancestor of `host` must resolve inside the root.
    /// Dangling links count as outside.
    fn confined(&self, host: &Path) -> bool {
        host.ancestors()
            .find(|p| p.symlink_metadata().is_ok())
            .and_then(|p| p.canonicalize().ok())
            .is_some_and(|real| real.starts_with(&self.root))
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FsError> {
        self.host_path(path)
            .ok_or_else(|| FsError::NotFound(String::from(path)))
    }

    fn require_dir(&self, path: &str) -> Result<PathBuf, FsError> {
        let host = self.resolve(path)?;
        if host.is_dir() {
            Ok(host)
        } else if host.exists() {
            Err(FsError::NotADirectory(String::from(path)))
        } else {
            Err(FsError::NotFound(String::from(path)))
        }
    }

    /// Bytes stored under the root.
    pub fn used(&self) -> Result<u64, FsError> {
        Ok(dir_size(&self.root)?)
    }

    /// Sorted drive paths of the entries in `path` matching `want_dirs`.
    fn list(&self, path: &str, want_dirs: bool) -> Result<Vec<String>, FsError> {
        let host = self.require_dir(path)?;
        let base = format!("{}{}", DRIVE_ROOT, components(path).join("\\"));

        let mut entries = Vec::new();
        for entry in fs::read_dir(&host)? {
            let entry = entry?;
            let entry_path = entry.path();
            if !self.confined(&entry_path) || entry_path.is_dir() != want_dirs {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => entries.push(join(&base, &name)),
                Err(name) => log::warn!("skipping non UTF-8 entry {:?}", name),
            }
        }
        entries.sort();
        Ok(entries)
    }
}

fn dir_size(dir: &Path) -> io::Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_dir() {
            total += dir_size(&entry.path())?;
        } else {
            total += meta.len();
        }
    }
    Ok(total)
}

impl FileSystem for HostFs {
    fn dir_exists(&self, path: &str) -> bool {
        self.host_path(path).is_some_and(|p| p.is_dir())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.host_path(path).is_some_and(|p| p.is_file())
    }

    fn create_dir(&mut self, path: &str) -> Result<(), FsError> {
        let host = self.resolve(path)?;
        if host.exists() {
            return Err(FsError::AlreadyExists(String::from(path)));
        }
        // Non-recursive: the parent has to be there already.
        fs::create_dir(&host).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(String::from(path)),
            _ => FsError::from(err),
        })
    }

    fn remove_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let host = self.require_dir(path)?;
        if host == self.root {
            return Err(FsError::Io(String::from("cannot remove the drive root")));
        }
        fs::remove_dir_all(&host)?;
        Ok(())
    }

    fn list_dirs(&self, path: &str) -> Result<Vec<String>, FsError> {
        self.list(path, true)
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError> {
        self.list(path, false)
    }

    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        let host = self.resolve(path)?;
        if host.is_dir() {
            return Err(FsError::IsADirectory(String::from(path)));
        }
        match fs::read(&host) {
            Ok(data) => Ok(String::from_utf8_lossy(&data).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FsError::NotFound(String::from(path)))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), FsError> {
        let host = self.resolve(path)?;
        if host.is_dir() {
            return Err(FsError::IsADirectory(String::from(path)));
        }
        if !host.parent().is_some_and(Path::is_dir) {
            return Err(FsError::NotFound(String::from(path)));
        }

        let existing = fs::metadata(&host).map_or(0, |m| m.len());
        let available = self.capacity.saturating_sub(self.used()?.saturating_sub(existing));
        let needed = data.len() as u64;
        if needed > available {
            return Err(FsError::NoSpace { needed, available });
        }

        fs::write(&host, data)?;
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        let host = self.resolve(path)?;
        if !host.is_file() {
            return Err(FsError::NotFound(String::from(path)));
        }
        fs::remove_file(&host)?;
        Ok(())
    }

    fn free_space(&self, path: &str) -> Result<u64, FsError> {
        self.require_dir(path)?;
        Ok(self.capacity.saturating_sub(self.used()?))
    }

    fn format(&mut self) -> Result<(), FsError> {
        log::info!("formatting {}", self.root.display());
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
