//! vshell: the command interpreter of a small shell running on a virtual
//! drive rooted at `0:\`.
//!
//! ```text
//! raw line → tokenizer → command parser → dispatcher ─┬─ sandbox → FileSystem
//!                                                      ├─ Console
//!                                                      └─ Platform (gui)
//! ```
//!
//! The interpreter is single-threaded and synchronous: each line runs to
//! completion before the next one is read. All session state lives in
//! [`Session`]; storage, output and the GUI are external services behind the
//! [`FileSystem`], [`Console`] and [`Platform`] traits.

pub mod arguments;
pub mod command;
pub mod config;
pub mod console;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod fs;
pub mod path;
pub mod platform;
pub mod sandbox;
pub mod session;
pub mod shell;
pub mod tokenizer;

pub use config::ShellFlags;
pub use console::{CaptureConsole, Color, Console};
pub use error::{EntryKind, FsError, ShellError};
pub use fs::{FileSystem, MemFs};
pub use path::DrivePath;
pub use platform::Platform;
pub use session::Session;
pub use shell::Shell;
