use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use vshell::constants::{BYTES_PER_MB, DEFAULT_CAPACITY_MB, DRIVE_LABEL};
use vshell::{DrivePath, FileSystem, MemFs, Session, Shell};

mod desktop;
mod hostfs;
mod logger;
mod repl;
mod terminal;

use desktop::TextDesktop;
use hostfs::HostFs;
use terminal::TerminalConsole;

#[derive(Parser)]
#[command(name = "vshell", version, about = "Shell on a virtual drive")]
struct Args {
    /// Host directory backing drive 0: (in-memory drive when omitted)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Drive capacity in MB
    #[arg(long, default_value_t = DEFAULT_CAPACITY_MB)]
    capacity_mb: u64,

    /// Run a command line and exit (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Starting directory, e.g. 0:\docs
    #[arg(long)]
    cwd: Option<String>,

    /// Diagnostics level written to stderr
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn open_drive(args: &Args) -> io::Result<Box<dyn FileSystem>> {
    let capacity = args.capacity_mb.saturating_mul(BYTES_PER_MB);
    match &args.root {
        Some(root) => Ok(Box::new(HostFs::open(root, capacity)?)),
        None => {
            log::info!("using in-memory drive ({} bytes)", capacity);
            Ok(Box::new(MemFs::with_capacity(capacity)))
        }
    }
}

fn start_session(args: &Args, fs: &dyn FileSystem) -> io::Result<Session> {
    let Some(cwd) = &args.cwd else {
        return Ok(Session::new());
    };
    match DrivePath::parse(cwd) {
        Some(path) if path.drive() == DRIVE_LABEL && fs.dir_exists(&path.to_string()) => {
            Ok(Session::with_cwd(path))
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no such directory on drive: {}", cwd),
        )),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level);

    let fs = open_drive(&args)?;
    let session = start_session(&args, fs.as_ref())?;
    let console = TerminalConsole::new(io::stdout(), !args.no_color);
    let mut shell = Shell::with_session(session, fs, console, TextDesktop::new());

    if !args.commands.is_empty() {
        let failures = repl::run_batch(&mut shell, &args.commands);
        log::info!("{} of {} lines failed", failures, args.commands.len());
        return Ok(());
    }

    let executed = repl::run_interactive(&mut shell, io::stdin().lock())?;
    log::info!(
        "session ended after {} lines, {} desktop frames",
        executed,
        shell.platform().frames()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vshell"]);
        assert!(args.root.is_none());
        assert_eq!(args.capacity_mb, DEFAULT_CAPACITY_MB);
        assert!(args.commands.is_empty());
        assert_eq!(args.log_level, LevelFilter::Warn);
        assert!(!args.no_color);
    }

    #[test]
    fn test_repeated_commands_keep_order() {
        let args = Args::parse_from(["vshell", "-c", "fs d mk a", "--command", "fs cd a"]);
        assert_eq!(args.commands, vec!["fs d mk a", "fs cd a"]);
    }

    #[test]
    fn test_start_session_in_existing_dir() {
        let mut fs = MemFs::new();
        fs.create_dir("0:\\docs").unwrap();

        let args = Args::parse_from(["vshell", "--cwd", "0:\\docs"]);
        let session = start_session(&args, &fs).unwrap();
        assert_eq!(session.cwd().to_string(), "0:\\docs");

        for cwd in ["0:\\missing", "1:\\docs", "docs"] {
            let args = Args::parse_from(["vshell", "--cwd", cwd]);
            assert!(start_session(&args, &fs).is_err(), "{}", cwd);
        }
    }

    #[test]
    fn test_host_root_drive() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from([
            "vshell",
            "--root",
            dir.path().to_str().unwrap(),
            "--capacity-mb",
            "1",
        ]);
        let fs = open_drive(&args).unwrap();
        assert_eq!(fs.free_space("0:\\").unwrap(), BYTES_PER_MB);
    }
}
