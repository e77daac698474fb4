//! Infrastructure adapters for goscaffold.
//!
//! This crate implements the ports defined in
//! `goscaffold_core::application::ports`. It contains all I/O: the real
//! filesystem, the `git` binary, and in-memory doubles for tests.

pub mod filesystem;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::{GitCli, RecordingVersionControl};
