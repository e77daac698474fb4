//! goscaffold core - Go project generation engine.
//!
//! This crate provides the domain and application layers of the goscaffold
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          goscaffold-cli (CLI)           │
//! │  flags, prompts, validation, output     │
//! └──────────────────┬──────────────────────┘
//!                    │ ProjectConfig
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      Generator: plan, then flush        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      Filesystem, VersionControl         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   goscaffold-adapters (Infrastructure)  │
//! │  LocalFilesystem, GitCli, test doubles  │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): TemplateKind, ProjectConfig, planner,
//!   template builders, feature builders, GenerationPlan
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use goscaffold_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> ScaffoldResult<()> {
//! let config = ProjectConfig::new("widget", "github.com/acme/widget")
//!     .with_template(TemplateKind::Api)
//!     .with_features(Features { tests: true, ..Features::none() });
//!
//! let generator = Generator::new(filesystem, vcs);
//! generator.generate(&config, ".")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Generator,
        ports::{Filesystem, VersionControl},
    };
    pub use crate::domain::{
        Artifact, Features, GenerationPlan, ProjectConfig, StepKind, TemplateKind,
    };
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
