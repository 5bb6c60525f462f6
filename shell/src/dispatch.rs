//! Command dispatcher.
//!
//! Runs one input line against a session. Errors never escape a line: they are
//! printed on the console and handed back to the caller for inspection only.

use crate::command::{self, Command, DirCommand, FsCommand};
use crate::config;
use crate::console::{center, Color, Console};
use crate::constants::{BUILD_LABEL, BYTES_PER_MB, COPYRIGHT, SYSTEM_NAME, VERSION};
use crate::error::{EntryKind, FsError, ShellError};
use crate::fs::FileSystem;
use crate::path::{strip_dir_prefix, DrivePath};
use crate::platform::Platform;
use crate::sandbox::safe_path;
use crate::session::Session;
use crate::tokenizer::tokenize;

/// External services a line may touch.
pub struct Services<'a> {
    pub fs: &'a mut dyn FileSystem,
    pub console: &'a mut dyn Console,
    pub platform: &'a mut dyn Platform,
}

/// Execute `line`, reporting any failure on the console.
pub fn run(line: &str, session: &mut Session, services: &mut Services<'_>) -> Result<(), ShellError> {
    let result = execute(line, session, services);
    if let Err(err) = &result {
        services.console.error(&err.to_string());
    }
    result
}

fn execute(line: &str, session: &mut Session, services: &mut Services<'_>) -> Result<(), ShellError> {
    let tokens = tokenize(line)?;
    let command = command::parse(line, &tokens)?;
    log::debug!("dispatching {:?}", command);

    match command {
        Command::Clear => services.console.clear(),
        Command::SysInfo => show_system_info(services.console),
        Command::Print { text } => services.console.write_line(Color::Gray, &text),
        Command::Fs(fs_command) => execute_fs(fs_command, session, services)?,
        Command::Gui => services
            .platform
            .launch_gui(services.console, session.flags),
        Command::Set { setting } => {
            let applied = setting.is_some_and(|s| config::apply_setting(&mut session.flags, s));
            if !applied {
                log::debug!("ignored setting {:?}", setting);
            }
        }
    }
    Ok(())
}

fn show_system_info(console: &mut dyn Console) {
    let width = console.width();
    console.write_line(
        Color::Cyan,
        &center(&format!("{} - {}", SYSTEM_NAME, VERSION), width),
    );
    console.write_line(Color::Cyan, &center(BUILD_LABEL, width));
    console.write_line(Color::Cyan, &"-".repeat(width));
    console.write_line(Color::Cyan, &center(COPYRIGHT, width));
}

/// Log a failed service call and turn it into the user-facing error.
fn failed(action: &'static str) -> impl FnOnce(FsError) -> ShellError {
    move |err| {
        log::warn!("{} failed: {}", action, err);
        ShellError::failed(action, err)
    }
}

fn execute_fs(
    command: FsCommand<'_>,
    session: &mut Session,
    services: &mut Services<'_>,
) -> Result<(), ShellError> {
    let cwd = session.cwd().to_string();
    let fs = &mut *services.fs;
    let console = &mut *services.console;

    match command {
        FsCommand::FreeSpace => {
            let free = fs.free_space(&cwd).map_err(failed("query free space"))?;
            console.info(&format!("Free space: {} MB", free / BYTES_PER_MB));
        }
        FsCommand::Format => {
            fs.format().map_err(failed("format drive"))?;
            session.set_cwd(DrivePath::root());
            console.info("Drive formatted.");
        }
        FsCommand::List => {
            let dirs = fs.list_dirs(&cwd).map_err(failed("list directories"))?;
            let files = fs.list_files(&cwd).map_err(failed("list files"))?;

            if !dirs.is_empty() {
                console.info(&format!("Directories ({}):", dirs.len()));
                for dir in &dirs {
                    console.write_line(Color::White, &format!("- {}", strip_dir_prefix(dir, &cwd)));
                }
                console.write_line(Color::White, "");
            }

            if !files.is_empty() {
                console.info(&format!("Files ({}):", files.len()));
                for file in &files {
                    console.write_line(Color::White, &format!("- {}", strip_dir_prefix(file, &cwd)));
                }
            }
        }
        FsCommand::Dir(DirCommand::Make { path }) => {
            let target = safe_path(session.cwd(), path)?;
            if !fs.dir_exists(&target) {
                fs.create_dir_all(&target).map_err(failed("create directory"))?;
            }
        }
        FsCommand::Dir(DirCommand::Remove { path }) => {
            let target = safe_path(session.cwd(), path)?;
            if !fs.dir_exists(&target) {
                return Err(ShellError::not_found(EntryKind::Directory, path, &cwd));
            }
            fs.remove_dir_all(&target).map_err(failed("delete directory"))?;
        }
        FsCommand::Write { path, content } => {
            let target = safe_path(session.cwd(), path)?;
            fs.write(&target, content.as_bytes()).map_err(failed("write file"))?;
        }
        FsCommand::Read { path } => {
            let target = safe_path(session.cwd(), path)?;
            if !fs.file_exists(&target) {
                return Err(ShellError::not_found(EntryKind::File, path, &cwd));
            }
            let text = fs.read_to_string(&target).map_err(failed("read file"))?;
            console.write_line(Color::Gray, &text);
        }
        FsCommand::Remove { path } => {
            let target = safe_path(session.cwd(), path)?;
            if !fs.file_exists(&target) {
                return Err(ShellError::not_found(EntryKind::File, path, &cwd));
            }
            fs.remove_file(&target).map_err(failed("delete file"))?;
        }
        FsCommand::ChangeDir { target } => change_dir(session, fs, target)?,
    }
    Ok(())
}

/// `fs cd`: walk up with `..`, otherwise descend into `target`.
///
/// Unlike the other file commands this does not go through the sandbox. The
/// new directory is only adopted once it is known to exist; `..` at the root
/// does nothing.
fn change_dir(session: &mut Session, fs: &dyn FileSystem, target: &str) -> Result<(), ShellError> {
    if target == ".." {
        if let Some(parent) = session.cwd().parent() {
            if fs.dir_exists(&parent.to_string()) {
                session.set_cwd(parent);
            } else {
                log::debug!("parent {} vanished, staying in {}", parent, session.cwd());
            }
        }
        return Ok(());
    }

    let next = session.cwd().child(target);
    if !fs.dir_exists(&next.to_string()) {
        return Err(ShellError::not_found(EntryKind::Directory, target, session.cwd()));
    }
    session.set_cwd(next);
    Ok(())
}
