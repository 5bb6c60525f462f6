// --- SESSION STATE -------------------------------------------------------------

use crate::config::ShellFlags;
use crate::path::DrivePath;

/// Per-session state handed to the dispatcher.
///
/// `cwd` must always name an existing directory; only `fs cd` and a
/// successful `fs fmt` move it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) cwd: DrivePath,
    pub flags: ShellFlags,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start somewhere other than the root. The caller is responsible for
    /// `cwd` existing on the drive.
    pub fn with_cwd(cwd: DrivePath) -> Self {
        Self {
            cwd,
            flags: ShellFlags::default(),
        }
    }

    pub fn cwd(&self) -> &DrivePath {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, cwd: DrivePath) {
        log::debug!("cwd {} -> {}", self.cwd, cwd);
        self.cwd = cwd;
    }
}
