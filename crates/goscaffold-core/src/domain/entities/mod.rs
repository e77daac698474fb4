pub mod artifact;
pub mod common;
pub mod config;
pub mod plan;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, RenderContext};
pub use common::RelativePath;
pub use config::{Features, ProjectConfig};
pub use plan::{GenerationPlan, Step, StepAction, StepKind};
