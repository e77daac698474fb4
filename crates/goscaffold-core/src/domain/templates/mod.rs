//! Template content builders.
//!
//! One pure builder per [`TemplateKind`]. Each returns the template's
//! artifacts (paths relative to the project root) and appends exactly one
//! test artifact when `features.tests` is set.

mod api;
mod basic;
mod cli;
mod grpc;
mod library;

use crate::domain::{
    entities::{Artifact, ProjectConfig},
    value_objects::TemplateKind,
};

/// Dispatch to the builder for the configured template kind.
///
/// Unrecognized kinds fall back to the `basic` builder.
pub fn build_template_files(config: &ProjectConfig) -> Vec<Artifact> {
    match config.template() {
        TemplateKind::Basic | TemplateKind::Unknown => basic::build(config),
        TemplateKind::Cli => cli::build(config),
        TemplateKind::Api => api::build(config),
        TemplateKind::Grpc => grpc::build(config),
        TemplateKind::Library => library::build(config),
    }
}
