//! Filesystem Module
//!
//! This module provides the Virtual File System (VFS) abstraction used by the
//! interpreter and the in-memory drive that backs it by default.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  dispatch   │  (fs commands, sandboxed paths)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ FileSystem  │  (trait, absolute drive paths)
//! └──────┬──────┘
//!        │
//!    ┌───┴────┐
//!    │        │
//! ┌──▼───┐ ┌──▼─────┐
//! │MemFs │ │ HostFs │  (in-memory drive / host directory, in the host crate)
//! └──────┘ └────────┘
//! ```

pub mod memfs;
pub mod vfs;

pub use memfs::MemFs;
pub use vfs::FileSystem;
