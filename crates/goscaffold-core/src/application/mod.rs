//! Application layer for goscaffold.
//!
//! This layer contains:
//! - **Services**: the [`Generator`] that executes a generation plan
//! - **Ports**: traits for the filesystem and version control
//! - **Errors**: failures of those side effects
//!
//! All content decisions live in `crate::domain`; this layer only performs
//! them in order.

pub mod error;
pub mod ports;
pub mod services;

pub use services::Generator;

pub use ports::{Filesystem, VersionControl};

pub use error::ApplicationError;
