// Drive layout
pub const DRIVE_LABEL: &str = "0:";
pub const DRIVE_ROOT: &str = "0:\\";
pub const SEPARATOR: char = '\\';
pub const ALT_SEPARATOR: char = '/';

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Capacity of a freshly created in-memory drive.
pub const DEFAULT_CAPACITY_MB: u64 = 64;

/// Used when the console cannot report its width.
pub const DEFAULT_CONSOLE_WIDTH: usize = 80;

// System information banner (`si`)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_LABEL: &str = "Hosted build // Experimental version";
pub const COPYRIGHT: &str = "Copyright (C) vshell contributors";
pub const SYSTEM_NAME: &str = "vshell";
