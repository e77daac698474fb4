//! Planning: which directories a template kind needs, and the full ordered
//! list of steps a generation run performs.

use crate::domain::{
    entities::{
        ProjectConfig,
        common::RelativePath,
        plan::{GenerationPlan, StepAction, StepKind},
    },
    features, templates,
    value_objects::TemplateKind,
};

/// Directories required for `kind`, relative to the output directory.
///
/// The project root (`name`) always comes first and the list never holds
/// duplicates. Unknown kinds get a generic `cmd`/`internal`/`pkg` layout.
pub fn plan_directories(name: &str, kind: TemplateKind, include_ci: bool) -> Vec<RelativePath> {
    let root = RelativePath::new(name);

    let layout: Vec<RelativePath> = match kind {
        TemplateKind::Basic => vec![],
        TemplateKind::Cli => vec![root.join("cmd").join(name), root.join("internal")],
        TemplateKind::Api => vec![
            root.join("cmd").join(name),
            root.join("internal").join("handler"),
            root.join("internal").join("middleware"),
            root.join("internal").join("router"),
            root.join("pkg"),
        ],
        TemplateKind::Grpc => vec![
            root.join("cmd").join(name),
            root.join("internal").join("server"),
            root.join("proto"),
            root.join("pkg"),
        ],
        TemplateKind::Library => vec![root.join("pkg").join(name), root.join("examples")],
        TemplateKind::Unknown => vec![
            root.join("cmd"),
            root.join("internal"),
            root.join("pkg"),
        ],
    };

    let mut dirs = Vec::with_capacity(layout.len() + 2);
    dirs.push(root.clone());
    dirs.extend(layout);
    if include_ci {
        dirs.push(root.join(".github").join("workflows"));
    }

    let mut seen = std::collections::HashSet::new();
    dirs.retain(|d| seen.insert(d.clone()));
    dirs
}

/// Every step of a run, in execution order, with all content rendered.
///
/// Order: directories, `go.mod`, template files, `.gitignore`, then the
/// enabled DevOps and quality files, the README and finally version control.
pub fn plan_generation(config: &ProjectConfig) -> GenerationPlan {
    let flags = config.features();
    let mut plan = GenerationPlan::new(config.name());

    plan.push(
        StepKind::Directories,
        StepAction::CreateDirectories(plan_directories(
            config.name(),
            config.template(),
            flags.ci,
        )),
    );
    plan.push(
        StepKind::Manifest,
        StepAction::WriteFiles(vec![features::manifest(config)]),
    );
    plan.push(
        StepKind::TemplateFiles,
        StepAction::WriteFiles(templates::build_template_files(config)),
    );
    plan.push(
        StepKind::Gitignore,
        StepAction::WriteFiles(vec![features::gitignore()]),
    );

    if flags.makefile {
        plan.push(
            StepKind::Makefile,
            StepAction::WriteFiles(vec![features::makefile(config)]),
        );
    }
    if flags.docker {
        plan.push(
            StepKind::Docker,
            StepAction::WriteFiles(features::docker_files(config)),
        );
    }
    if flags.ci {
        plan.push(
            StepKind::Ci,
            StepAction::WriteFiles(vec![features::ci_workflow()]),
        );
    }
    if flags.lint {
        plan.push(
            StepKind::Lint,
            StepAction::WriteFiles(vec![features::lint_config()]),
        );
    }
    if flags.precommit {
        plan.push(
            StepKind::PreCommit,
            StepAction::WriteFiles(vec![features::precommit_config()]),
        );
    }

    plan.push(
        StepKind::Readme,
        StepAction::WriteFiles(vec![features::readme(config)]),
    );

    if flags.git {
        plan.push(StepKind::VersionControl, StepAction::InitVersionControl);
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Features;
    use std::path::Path;

    fn paths(dirs: &[RelativePath]) -> Vec<&Path> {
        dirs.iter().map(RelativePath::as_path).collect()
    }

    #[test]
    fn basic_needs_only_the_root() {
        let dirs = plan_directories("demo", TemplateKind::Basic, false);
        assert_eq!(paths(&dirs), vec![Path::new("demo")]);
    }

    #[test]
    fn cli_layout() {
        let dirs = plan_directories("demo", TemplateKind::Cli, false);
        assert_eq!(
            paths(&dirs),
            vec![
                Path::new("demo"),
                Path::new("demo/cmd/demo"),
                Path::new("demo/internal"),
            ]
        );
    }

    #[test]
    fn api_layout() {
        let dirs = plan_directories("demo", TemplateKind::Api, false);
        assert_eq!(
            paths(&dirs),
            vec![
                Path::new("demo"),
                Path::new("demo/cmd/demo"),
                Path::new("demo/internal/handler"),
                Path::new("demo/internal/middleware"),
                Path::new("demo/internal/router"),
                Path::new("demo/pkg"),
            ]
        );
    }

    #[test]
    fn grpc_layout() {
        let dirs = plan_directories("demo", TemplateKind::Grpc, false);
        assert_eq!(
            paths(&dirs),
            vec![
                Path::new("demo"),
                Path::new("demo/cmd/demo"),
                Path::new("demo/internal/server"),
                Path::new("demo/proto"),
                Path::new("demo/pkg"),
            ]
        );
    }

    #[test]
    fn library_layout() {
        let dirs = plan_directories("demo", TemplateKind::Library, false);
        assert_eq!(
            paths(&dirs),
            vec![
                Path::new("demo"),
                Path::new("demo/pkg/demo"),
                Path::new("demo/examples"),
            ]
        );
    }

    #[test]
    fn unknown_kind_falls_back_to_generic_layout() {
        let dirs = plan_directories("demo", TemplateKind::Unknown, false);
        assert_eq!(
            paths(&dirs),
            vec![
                Path::new("demo"),
                Path::new("demo/cmd"),
                Path::new("demo/internal"),
                Path::new("demo/pkg"),
            ]
        );
    }

    #[test]
    fn ci_appends_workflow_directory_last() {
        for kind in TemplateKind::ALL {
            let dirs = plan_directories("demo", kind, true);
            assert_eq!(dirs.first().unwrap().as_path(), Path::new("demo"));
            assert_eq!(
                dirs.last().unwrap().as_path(),
                Path::new("demo/.github/workflows")
            );
        }
    }

    #[test]
    fn never_contains_duplicates() {
        let mut kinds = TemplateKind::ALL.to_vec();
        kinds.push(TemplateKind::Unknown);

        for name in ["demo", "pkg", "internal"] {
            for &kind in &kinds {
                for ci in [false, true] {
                    let dirs = plan_directories(name, kind, ci);
                    let unique: std::collections::HashSet<_> = dirs.iter().collect();
                    assert_eq!(unique.len(), dirs.len(), "{name} {kind} ci={ci}");
                }
            }
        }
    }

    #[test]
    fn minimal_plan_has_base_steps_only() {
        let plan = plan_generation(&ProjectConfig::new("demo", "demo"));
        let kinds: Vec<_> = plan.step_kinds().collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Directories,
                StepKind::Manifest,
                StepKind::TemplateFiles,
                StepKind::Gitignore,
                StepKind::Readme,
            ]
        );
    }

    #[test]
    fn full_plan_orders_optional_steps() {
        let features = Features {
            git: true,
            ..Features::all_files()
        };
        let plan = plan_generation(&ProjectConfig::new("demo", "demo").with_features(features));
        let kinds: Vec<_> = plan.step_kinds().collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Directories,
                StepKind::Manifest,
                StepKind::TemplateFiles,
                StepKind::Gitignore,
                StepKind::Makefile,
                StepKind::Docker,
                StepKind::Ci,
                StepKind::Lint,
                StepKind::PreCommit,
                StepKind::Readme,
                StepKind::VersionControl,
            ]
        );
    }

    #[test]
    fn each_flag_adds_its_own_step() {
        let cases = [
            (
                Features {
                    makefile: true,
                    ..Features::none()
                },
                StepKind::Makefile,
            ),
            (
                Features {
                    docker: true,
                    ..Features::none()
                },
                StepKind::Docker,
            ),
            (
                Features {
                    ci: true,
                    ..Features::none()
                },
                StepKind::Ci,
            ),
            (
                Features {
                    lint: true,
                    ..Features::none()
                },
                StepKind::Lint,
            ),
            (
                Features {
                    precommit: true,
                    ..Features::none()
                },
                StepKind::PreCommit,
            ),
            (
                Features {
                    git: true,
                    ..Features::none()
                },
                StepKind::VersionControl,
            ),
        ];

        for (features, kind) in cases {
            let plan = plan_generation(&ProjectConfig::new("demo", "demo").with_features(features));
            assert!(plan.contains_step(kind), "{kind:?}");
            assert_eq!(plan.steps().len(), 6, "{kind:?}");
        }
    }

    #[test]
    fn ci_directory_planned_with_workflow() {
        let plan = plan_generation(&ProjectConfig::new("demo", "demo").with_features(Features {
            ci: true,
            ..Features::none()
        }));
        assert!(
            plan.directories()
                .any(|d| d.as_path() == Path::new("demo/.github/workflows"))
        );
        assert!(
            plan.file_paths()
                .contains(Path::new(".github/workflows/ci.yml"))
        );
    }
}
