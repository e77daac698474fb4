//! Core domain layer for goscaffold.
//!
//! Pure logic only: no filesystem, no processes, no environment. Everything
//! here maps a [`ProjectConfig`] to data ([`Artifact`]s, directories, a
//! [`GenerationPlan`]); the application layer performs the side effects.

pub mod entities;
pub mod error;
pub mod features;
pub mod planner;
pub mod templates;
pub mod value_objects;

pub use entities::{
    Artifact, Features, GenerationPlan, ProjectConfig, RelativePath, RenderContext, Step,
    StepAction, StepKind,
};
pub use error::{DomainError, ErrorCategory};
pub use planner::{plan_directories, plan_generation};
pub use templates::build_template_files;
pub use value_objects::TemplateKind;
