//! Shell Service
//!
//! Owns a session together with the services it runs against, so callers can
//! feed it one line at a time.

use crate::console::Console;
use crate::dispatch::{self, Services};
use crate::error::ShellError;
use crate::fs::FileSystem;
use crate::platform::Platform;
use crate::session::Session;

pub struct Shell<F, C, P> {
    session: Session,
    fs: F,
    console: C,
    platform: P,
}

impl<F, C, P> Shell<F, C, P>
where
    F: FileSystem,
    C: Console,
    P: Platform,
{
    pub fn new(fs: F, console: C, platform: P) -> Self {
        Self::with_session(Session::new(), fs, console, platform)
    }

    pub fn with_session(session: Session, fs: F, console: C, platform: P) -> Self {
        Self {
            session,
            fs,
            console,
            platform,
        }
    }

    /// Run one input line. The error, if any, has already been printed.
    pub fn run(&mut self, line: &str) -> Result<(), ShellError> {
        let mut services = Services {
            fs: &mut self.fs,
            console: &mut self.console,
            platform: &mut self.platform,
        };
        dispatch::run(line, &mut self.session, &mut services)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Prompt text for the current directory.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.session.cwd())
    }
}
