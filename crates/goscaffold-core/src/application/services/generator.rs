//! Generator - the generation orchestrator.
//!
//! Runs in two phases:
//! 1. Plan: render every directory and file for the configuration (pure)
//! 2. Flush: perform the plan's steps in order through the ports
//!
//! The first failure aborts the run. Nothing is rolled back; files written
//! before the failure stay on disk.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, VersionControl},
    domain::{GenerationPlan, ProjectConfig, StepAction, StepKind, plan_generation},
    error::ScaffoldResult,
};

/// Generates Go projects through injected filesystem and version control
/// adapters.
pub struct Generator {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl Generator {
    pub fn new(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> Self {
        Self { filesystem, vcs }
    }

    /// Compute the full plan for `config` without touching the outside world.
    pub fn plan(config: &ProjectConfig) -> GenerationPlan {
        plan_generation(config)
    }

    /// Generate the project described by `config` under `output_dir`.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_dir: impl AsRef<Path>,
    ) -> ScaffoldResult<GenerationPlan> {
        self.generate_with(config, output_dir, |_| {})
    }

    /// Like [`generate`](Self::generate), calling `on_step` before each step runs.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            template = %config.template(),
            output_dir = %output_dir.as_ref().display()
        )
    )]
    pub fn generate_with(
        &self,
        config: &ProjectConfig,
        output_dir: impl AsRef<Path>,
        on_step: impl FnMut(StepKind),
    ) -> ScaffoldResult<GenerationPlan> {
        let plan = Self::plan(config);
        info!(
            steps = plan.steps().len(),
            files = plan.file_count(),
            directories = plan.directory_count(),
            "Plan ready"
        );

        self.execute(&plan, output_dir.as_ref(), on_step)?;

        info!("Generation completed successfully");
        Ok(plan)
    }

    /// Perform an already computed plan.
    ///
    /// Directories are resolved against `output_dir`; files and version
    /// control against `output_dir/<project dir>`.
    pub fn execute(
        &self,
        plan: &GenerationPlan,
        output_dir: &Path,
        mut on_step: impl FnMut(StepKind),
    ) -> ScaffoldResult<()> {
        let project_root = output_dir.join(plan.project_dir());

        for step in plan.steps() {
            on_step(step.kind);
            debug!(step = ?step.kind, "Running step");

            match &step.action {
                StepAction::CreateDirectories(dirs) => {
                    for dir in dirs {
                        self.filesystem.create_dir_all(&output_dir.join(dir))?;
                    }
                }
                StepAction::WriteFiles(files) => {
                    for file in files {
                        let path = project_root.join(&file.path);
                        debug!(path = %path.display(), bytes = file.size(), "Writing file");
                        self.filesystem.write_file(&path, &file.content)?;
                    }
                }
                StepAction::InitVersionControl => {
                    self.vcs.init(&project_root)?;
                }
            }
        }

        Ok(())
    }
}
