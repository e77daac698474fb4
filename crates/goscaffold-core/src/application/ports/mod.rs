//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented by
//! `goscaffold-adapters`:
//!
//! - `Filesystem`: directory creation and file writes
//! - `VersionControl`: repository initialisation

pub mod output;

pub use output::{Filesystem, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockVersionControl};
