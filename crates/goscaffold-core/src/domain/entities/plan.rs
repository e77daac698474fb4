use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::domain::entities::{artifact::Artifact, common::RelativePath};

/// The ordered stages of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Directories,
    Manifest,
    TemplateFiles,
    Gitignore,
    Makefile,
    Docker,
    Ci,
    Lint,
    PreCommit,
    Readme,
    VersionControl,
}

impl StepKind {
    /// Progress label shown while the step runs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Directories => "Creating directories...",
            Self::Manifest => "Creating go.mod...",
            Self::TemplateFiles => "Creating template files...",
            Self::Gitignore => "Creating .gitignore...",
            Self::Makefile => "Creating Makefile...",
            Self::Docker => "Creating Docker files...",
            Self::Ci => "Creating CI workflow...",
            Self::Lint => "Creating linter config...",
            Self::PreCommit => "Creating pre-commit config...",
            Self::Readme => "Creating README...",
            Self::VersionControl => "Initializing git repository...",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a step does to the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Directories relative to the output directory; the project root first.
    CreateDirectories(Vec<RelativePath>),
    /// Files relative to the project root, written in order.
    WriteFiles(Vec<Artifact>),
    /// Initialise a repository in the project root.
    InitVersionControl,
}

impl StepAction {
    pub fn directories(&self) -> &[RelativePath] {
        match self {
            Self::CreateDirectories(dirs) => dirs,
            _ => &[],
        }
    }

    pub fn files(&self) -> &[Artifact] {
        match self {
            Self::WriteFiles(files) => files,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub action: StepAction,
}

/// Everything a generation run will do, computed before the first write.
///
/// Building a plan has no side effects; executing it is the
/// orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    project_dir: RelativePath,
    steps: Vec<Step>,
}

impl GenerationPlan {
    pub fn new(project_dir: impl Into<RelativePath>) -> Self {
        Self {
            project_dir: project_dir.into(),
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: StepKind, action: StepAction) {
        self.steps.push(Step { kind, action });
    }

    /// Project root, relative to the output directory.
    pub fn project_dir(&self) -> &RelativePath {
        &self.project_dir
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_kinds(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(|s| s.kind)
    }

    pub fn contains_step(&self, kind: StepKind) -> bool {
        self.steps.iter().any(|s| s.kind == kind)
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.steps.iter().flat_map(|s| s.action.directories())
    }

    /// Every artifact in write order, including ones later overwritten.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.steps.iter().flat_map(|s| s.action.files())
    }

    /// The distinct set of file paths the run leaves on disk.
    pub fn file_paths(&self) -> BTreeSet<&Path> {
        self.artifacts().map(|a| a.path.as_path()).collect()
    }

    /// Final content at `path`; the last write wins.
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.artifacts()
            .filter(|a| a.path.as_path() == path)
            .last()
            .map(|a| a.content.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.file_paths().len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }
}
