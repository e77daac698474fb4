//! Builders for the files that sit around the template code: the module
//! manifest and ignore file every project gets, plus the optional DevOps,
//! code quality and documentation files.
//!
//! All builders are pure. Which of them run is decided by the planner in
//! `application::services::generator`.

mod base;
mod ci;
mod docker;
mod makefile;
mod quality;
mod readme;

pub use base::{gitignore, manifest};
pub use ci::ci_workflow;
pub use docker::docker_files;
pub use makefile::makefile;
pub use quality::{lint_config, precommit_config};
pub use readme::readme;

/// Go toolchain version declared in `go.mod` and the README prerequisites.
pub const GO_VERSION: &str = "1.21";
