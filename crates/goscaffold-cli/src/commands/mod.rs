//! One module per subcommand; each exposes an `execute` entry point.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod templates;
pub mod version;
