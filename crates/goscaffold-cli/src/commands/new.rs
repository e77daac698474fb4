//! Implementation of the `goscaffold new` command.
//!
//! Responsibility: turn flags, config defaults and prompt answers into a
//! [`ProjectConfig`], then hand it to the core [`Generator`]. Validation of
//! user input happens here; the engine trusts what it receives.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use goscaffold_adapters::{GitCli, LocalFilesystem};
use goscaffold_core::{
    application::Generator,
    domain::{Features, GenerationPlan, ProjectConfig, StepKind, TemplateKind},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::{self, Prompter},
};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid name pattern"));

/// Names that collide with conventional Go layout directories.
const RESERVED_NAMES: &[&str] = &["internal", "pkg", "cmd", "vendor", "test", "main"];

/// Execute the `goscaffold new` command.
///
/// 1. Resolve and validate the project name
/// 2. Refuse to touch an existing directory
/// 3. Resolve module path, template and features (flags, then prompts,
///    then config defaults)
/// 4. Print the summary; stop here on `--dry-run`
/// 5. Execute the plan and print next steps
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = if args.no_interactive {
        None
    } else {
        prompt::terminal()
    };
    let prompter = prompter.as_deref();
    debug!(
        interactive = prompter.is_some(),
        verbose = global.verbose,
        "Resolving project"
    );

    output.header("goscaffold - Go Project Generator")?;
    output.print("")?;

    // 1–2. Name and collision check
    let name = resolve_name(&args, prompter)?;
    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_path = project_path(args.output.as_deref(), &name);
    if project_path.exists() {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 3. Everything else
    let project = resolve_project(&name, &args, &config.defaults, prompter)?;

    output.kv("Project", project.name())?;
    output.kv("Module", project.module_path())?;
    output.kv("Template", project.template().as_str())?;
    output.print("")?;

    let plan = Generator::plan(&project);

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        show_plan(&plan, &output)?;
        return Ok(());
    }

    // 5. Generate
    info!(
        project = %project.name(),
        template = %project.template(),
        path = %project_path.display(),
        "Generation started"
    );

    let generator = Generator::new(Box::new(LocalFilesystem::new()), Box::new(GitCli::new()));
    let progress = output.progress(plan.steps().len() as u64);
    let result = generator.execute(&plan, &output_dir, |kind| {
        if progress.is_hidden() {
            report_step(output.step(kind.label()), kind);
        } else {
            progress.set_message(kind.label());
            progress.inc(1);
        }
    });
    progress.finish_and_clear();
    result.with_cli_context(|| format!("generating {}", project_path.display()))?;

    info!(project = %project.name(), files = plan.file_count(), "Generation completed");

    output.print("")?;
    output.success(&format!("Project '{}' created successfully!", project.name()))?;
    output.print("")?;
    output.header("Next steps:")?;
    for line in next_steps(&project_path, project.name(), project.template()) {
        output.print(&format!("  {line}"))?;
    }
    output.print("")?;

    Ok(())
}

/// Progress output is best effort; a failed write must not abort generation.
fn report_step(result: std::io::Result<()>, kind: StepKind) {
    if let Err(e) = result {
        warn!(error = %e, step = ?kind, "Failed to print progress");
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Where the project lands, as shown to the user; no `./` prefix when no
/// output directory was given.
pub fn project_path(output: Option<&Path>, name: &str) -> PathBuf {
    output.map_or_else(|| PathBuf::from(name), |dir| dir.join(name))
}

/// Name from the argument, else from a prompt; validated either way.
fn resolve_name(args: &NewArgs, prompter: Option<&dyn Prompter>) -> CliResult<String> {
    let name = match (&args.name, prompter) {
        (Some(name), _) => name.clone(),
        (None, Some(p)) => p.input("Project name", "myproject")?,
        (None, None) => return Err(CliError::MissingProjectName),
    };
    validate_project_name(&name)?;
    Ok(name)
}

/// Module path, template and features for an already validated `name`.
fn resolve_project(
    name: &str,
    args: &NewArgs,
    defaults: &Defaults,
    prompter: Option<&dyn Prompter>,
) -> CliResult<ProjectConfig> {
    let mut github = args.github.clone().or_else(|| defaults.github_user.clone());
    if args.module.is_none() && github.is_none() {
        if let Some(p) = prompter {
            github = Some(p.input("GitHub username", "")?);
        }
    }
    let module_path = derive_module_path(name, args.module.as_deref(), github.as_deref());

    let template = match (args.template, prompter) {
        (Some(arg), _) => arg.into(),
        (None, Some(p)) => p.template(defaults.template)?,
        (None, None) => defaults.template,
    };

    let mut features = resolve_features(args, &defaults.features);
    if let Some(p) = prompter {
        if !devops_specified(args)
            && p.confirm("Include DevOps files (Makefile, Docker, CI)?")?
        {
            features.makefile = true;
            features.docker = true;
            features.ci = true;
        }
        if !quality_specified(args)
            && p.confirm("Include code quality tools (linter, pre-commit, tests)?")?
        {
            features.lint = true;
            features.precommit = true;
            features.tests = true;
        }
    }

    debug!(%module_path, %template, ?features, "Project resolved");

    Ok(ProjectConfig::new(name, module_path)
        .with_template(template)
        .with_features(features))
}

/// Check `name` against the naming rules for a project directory.
pub fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: String| CliError::InvalidProjectName {
        name: name.into(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("project name cannot be empty".into()));
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(invalid(
            "project name must start with a letter and contain only letters, numbers, \
             hyphens, or underscores"
                .into(),
        ));
    }

    let lower = name.to_ascii_lowercase();
    if RESERVED_NAMES.contains(&lower.as_str()) {
        return Err(invalid(format!("'{name}' is a reserved name")));
    }

    Ok(())
}

/// `--module` wins, then `github.com/<user>/<name>`, then the bare name.
pub fn derive_module_path(name: &str, module: Option<&str>, github: Option<&str>) -> String {
    match (module.filter(|m| !m.is_empty()), github.filter(|g| !g.is_empty())) {
        (Some(module), _) => module.to_string(),
        (None, Some(user)) => format!("github.com/{user}/{name}"),
        (None, None) => name.to_string(),
    }
}

/// Flags and config defaults merged, with `-D` / `-Q` expanded.
pub fn resolve_features(args: &NewArgs, defaults: &Features) -> Features {
    Features {
        makefile: defaults.makefile || args.makefile || args.all_devops,
        docker: defaults.docker || args.docker || args.all_devops,
        ci: defaults.ci || args.ci || args.all_devops,
        lint: defaults.lint || args.lint || args.all_quality,
        precommit: defaults.precommit || args.precommit || args.all_quality,
        tests: defaults.tests || args.tests || args.all_quality,
        git: defaults.git || args.git,
    }
}

/// Whether any DevOps flag was given, which skips the DevOps question.
pub fn devops_specified(args: &NewArgs) -> bool {
    args.all_devops || args.makefile || args.docker || args.ci
}

/// Whether any quality flag was given, which skips the quality question.
pub fn quality_specified(args: &NewArgs) -> bool {
    args.all_quality || args.lint || args.precommit || args.tests
}

/// Commands to print after a successful run.
pub fn next_steps(project_path: &Path, name: &str, kind: TemplateKind) -> Vec<String> {
    let run = if kind.has_cmd_entry_point() {
        format!("go run ./cmd/{name}")
    } else {
        "go run .".to_string()
    };
    vec![
        format!("cd {}", project_path.display()),
        "go mod tidy".to_string(),
        run,
    ]
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    out.info("Dry run: no files will be written")?;
    out.print("")?;
    out.print(&format!("Directories ({}):", plan.directory_count()))?;
    for dir in plan.directories() {
        out.step(&format!("{dir}/"))?;
    }
    out.print(&format!("Files ({}):", plan.file_count()))?;
    let root = plan.project_dir().as_path();
    for path in plan.file_paths() {
        out.step(&root.join(path).display().to_string())?;
    }
    if plan.contains_step(StepKind::VersionControl) {
        out.step("git init")?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TemplateArg;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers questions from a script and records what was asked.
    #[derive(Default)]
    struct Scripted {
        inputs: RefCell<VecDeque<String>>,
        template: Option<TemplateKind>,
        confirm: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn with_inputs(inputs: &[&str]) -> Self {
            Self {
                inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
                ..Self::default()
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl Prompter for Scripted {
        fn input(&self, label: &str, default: &str) -> CliResult<String> {
            self.asked.borrow_mut().push(label.to_string());
            Ok(self
                .inputs
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| default.to_string()))
        }

        fn template(&self, default: TemplateKind) -> CliResult<TemplateKind> {
            self.asked.borrow_mut().push("template".into());
            Ok(self.template.unwrap_or(default))
        }

        fn confirm(&self, label: &str) -> CliResult<bool> {
            self.asked.borrow_mut().push(label.to_string());
            Ok(self.confirm)
        }
    }

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: Some(name.into()),
            no_interactive: true,
            ..NewArgs::default()
        }
    }

    // ── validate_project_name ─────────────────────────────────────────────────

    #[test]
    fn valid_names_pass() {
        for name in ["myapp", "my-api", "my_lib2", "A", "Internal2"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        let err = validate_project_name("").unwrap_err();
        assert_eq!(err.to_string(), "project name cannot be empty");
    }

    #[test]
    fn bad_characters_are_invalid() {
        for name in ["1app", "-app", "_app", "my app", "my.app", "a/b", "café"] {
            let err = validate_project_name(name).unwrap_err();
            assert!(
                err.to_string().starts_with("project name must start with a letter"),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn reserved_names_are_rejected_case_insensitively() {
        for name in ["internal", "pkg", "cmd", "vendor", "test", "main", "Main", "PKG"] {
            let err = validate_project_name(name).unwrap_err();
            assert_eq!(err.to_string(), format!("'{name}' is a reserved name"));
        }
    }

    // ── derive_module_path ────────────────────────────────────────────────────

    #[test]
    fn module_path_precedence() {
        assert_eq!(
            derive_module_path("demo", Some("example.com/x/demo"), Some("octocat")),
            "example.com/x/demo"
        );
        assert_eq!(
            derive_module_path("demo", None, Some("octocat")),
            "github.com/octocat/demo"
        );
        assert_eq!(derive_module_path("demo", None, None), "demo");
        assert_eq!(derive_module_path("demo", Some(""), Some("")), "demo");
    }

    // ── resolve_features ──────────────────────────────────────────────────────

    #[test]
    fn aggregate_flags_expand() {
        let a = NewArgs {
            all_devops: true,
            all_quality: true,
            ..args("demo")
        };
        assert_eq!(resolve_features(&a, &Features::none()), Features::all_files());
    }

    #[test]
    fn individual_flags_stay_independent() {
        let a = NewArgs {
            docker: true,
            tests: true,
            git: true,
            ..args("demo")
        };
        let f = resolve_features(&a, &Features::none());
        assert!(f.docker && f.tests && f.git);
        assert!(!f.makefile && !f.ci && !f.lint && !f.precommit);
    }

    #[test]
    fn config_defaults_are_merged() {
        let defaults = Features {
            lint: true,
            ..Features::none()
        };
        let f = resolve_features(&args("demo"), &defaults);
        assert!(f.lint);
        assert!(!f.docker);
    }

    #[test]
    fn group_specified_checks() {
        assert!(!devops_specified(&args("demo")));
        assert!(devops_specified(&NewArgs {
            ci: true,
            ..args("demo")
        }));
        assert!(quality_specified(&NewArgs {
            precommit: true,
            ..args("demo")
        }));
        assert!(!quality_specified(&NewArgs {
            all_devops: true,
            ..args("demo")
        }));
    }

    // ── next_steps ────────────────────────────────────────────────────────────

    #[test]
    fn next_steps_run_target_per_kind() {
        let run = |kind| next_steps(Path::new("demo"), "demo", kind)[2].clone();
        assert_eq!(run(TemplateKind::Cli), "go run ./cmd/demo");
        assert_eq!(run(TemplateKind::Api), "go run ./cmd/demo");
        assert_eq!(run(TemplateKind::Grpc), "go run ./cmd/demo");
        assert_eq!(run(TemplateKind::Basic), "go run .");
        assert_eq!(run(TemplateKind::Library), "go run .");
    }

    #[test]
    fn next_steps_start_with_cd_and_tidy() {
        let steps = next_steps(Path::new("out/demo"), "demo", TemplateKind::Basic);
        assert_eq!(steps[0], "cd out/demo");
        assert_eq!(steps[1], "go mod tidy");
    }

    #[test]
    fn project_path_is_bare_name_without_output_dir() {
        assert_eq!(project_path(None, "demo"), Path::new("demo"));
        assert_eq!(
            project_path(Some(Path::new("out")), "demo"),
            Path::new("out/demo")
        );
    }

    #[test]
    fn existing_project_error_names_the_bare_directory() {
        let err = CliError::ProjectExists {
            path: project_path(None, "demo"),
        };
        assert_eq!(err.to_string(), "directory 'demo' already exists");
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_progress_write_is_logged() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            report_step(Ok(()), StepKind::Manifest);
            report_step(
                Err(std::io::Error::other("broken pipe")),
                StepKind::Readme,
            );
        });

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.lines().count(), 1, "{text}");
        assert!(text.contains("WARN"), "{text}");
        assert!(text.contains("broken pipe"), "{text}");
        assert!(text.contains("Readme"), "{text}");
    }

    // ── resolve_name / resolve_project ────────────────────────────────────────

    #[test]
    fn missing_name_without_prompts_is_an_error() {
        let a = NewArgs {
            name: None,
            ..args("x")
        };
        assert!(matches!(
            resolve_name(&a, None),
            Err(CliError::MissingProjectName)
        ));
    }

    #[test]
    fn missing_name_is_prompted_with_default() {
        let p = Scripted::default();
        let a = NewArgs {
            name: None,
            ..args("x")
        };
        assert_eq!(resolve_name(&a, Some(&p)).unwrap(), "myproject");
        assert_eq!(p.asked(), vec!["Project name"]);
    }

    #[test]
    fn prompted_name_is_validated() {
        let p = Scripted::with_inputs(&["vendor"]);
        let a = NewArgs {
            name: None,
            ..args("x")
        };
        assert!(matches!(
            resolve_name(&a, Some(&p)),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn non_interactive_uses_flags_and_defaults() {
        let defaults = Defaults {
            template: TemplateKind::Library,
            ..Defaults::default()
        };
        let cfg = resolve_project("demo", &args("demo"), &defaults, None).unwrap();
        assert_eq!(cfg.module_path(), "demo");
        assert_eq!(cfg.template(), TemplateKind::Library);
        assert_eq!(cfg.features(), Features::none());
    }

    #[test]
    fn template_flag_beats_config_default() {
        let a = NewArgs {
            template: Some(TemplateArg::Grpc),
            github: Some("octocat".into()),
            ..args("demo")
        };
        let defaults = Defaults {
            template: TemplateKind::Library,
            ..Defaults::default()
        };
        let cfg = resolve_project("demo", &a, &defaults, None).unwrap();
        assert_eq!(cfg.template(), TemplateKind::Grpc);
        assert_eq!(cfg.module_path(), "github.com/octocat/demo");
    }

    #[test]
    fn interactive_asks_everything_unspecified() {
        let p = Scripted {
            template: Some(TemplateKind::Api),
            confirm: true,
            ..Scripted::with_inputs(&["octocat"])
        };
        let cfg = resolve_project("demo", &args("demo"), &Defaults::default(), Some(&p)).unwrap();

        assert_eq!(p.asked().len(), 4);
        assert_eq!(cfg.module_path(), "github.com/octocat/demo");
        assert_eq!(cfg.template(), TemplateKind::Api);
        assert_eq!(cfg.features(), Features::all_files());
    }

    #[test]
    fn flags_suppress_their_prompts() {
        let p = Scripted {
            confirm: true,
            ..Scripted::default()
        };
        let a = NewArgs {
            module: Some("example.com/demo".into()),
            template: Some(TemplateArg::Cli),
            makefile: true,
            lint: true,
            ..args("demo")
        };
        let cfg = resolve_project("demo", &a, &Defaults::default(), Some(&p)).unwrap();

        assert!(p.asked().is_empty());
        let f = cfg.features();
        assert!(f.makefile && f.lint);
        assert!(!f.docker && !f.tests);
    }

    #[test]
    fn declining_group_prompts_keeps_features_off() {
        let p = Scripted::with_inputs(&[""]);
        let cfg = resolve_project("demo", &args("demo"), &Defaults::default(), Some(&p)).unwrap();
        assert_eq!(cfg.module_path(), "demo");
        assert_eq!(cfg.features(), Features::none());
    }
}
