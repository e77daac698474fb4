use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TemplateKind;

/// Independent toggles, one per optional file group.
///
/// Aggregate switches such as "all DevOps" are expanded by the caller before
/// a [`ProjectConfig`] is built; the engine only sees the canonical set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub makefile: bool,
    pub docker: bool,
    pub ci: bool,
    pub lint: bool,
    pub precommit: bool,
    pub tests: bool,
    pub git: bool,
}

impl Features {
    /// No optional files at all.
    pub const fn none() -> Self {
        Self {
            makefile: false,
            docker: false,
            ci: false,
            lint: false,
            precommit: false,
            tests: false,
            git: false,
        }
    }

    /// Every file group, without version control initialisation.
    pub const fn all_files() -> Self {
        Self {
            makefile: true,
            docker: true,
            ci: true,
            lint: true,
            precommit: true,
            tests: true,
            git: false,
        }
    }
}

/// Fully-resolved generation configuration.
///
/// Built once per invocation and never mutated afterwards; the engine
/// trusts the name and module path to be valid already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    module_path: String,
    template: TemplateKind,
    features: Features,
}

impl ProjectConfig {
    /// A `basic` project with no optional features.
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            template: TemplateKind::default(),
            features: Features::none(),
        }
    }

    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn features(&self) -> Features {
        self.features
    }
}
