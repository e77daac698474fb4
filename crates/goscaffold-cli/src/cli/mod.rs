//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use goscaffold_core::domain::TemplateKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goscaffold",
    bin_name = "goscaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold Go projects",
    long_about = "goscaffold creates new Go projects with conventional directory \
                  layouts, starter code, and optional DevOps and code quality files.",
    after_help = "EXAMPLES:\n\
        \x20 goscaffold new myapp\n\
        \x20 goscaffold new myapi -t api -g username --all-devops\n\
        \x20 goscaffold new mycli -t cli -g username -D -Q\n\
        \x20 goscaffold completions bash > /usr/share/bash-completion/completions/goscaffold",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Go project.
    #[command(
        visible_alias = "n",
        about = "Create a new Go project",
        long_about = "Create a new Go project with the specified template and options.\n\n\
            Templates:\n\
            \x20 basic    - Minimal Go project (default)\n\
            \x20 cli      - CLI application with Cobra\n\
            \x20 api      - REST API with Chi router\n\
            \x20 grpc     - gRPC service with proto files\n\
            \x20 library  - Reusable Go library",
        after_help = "EXAMPLES:\n\
            \x20 goscaffold new myapp\n\
            \x20 goscaffold new myapi -t api -g username --all-devops\n\
            \x20 goscaffold new mylib -t library -m example.com/mylib --tests --no-interactive"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 goscaffold templates\n\
            \x20 goscaffold templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Print version information.
    #[command(about = "Print version information")]
    Version,

    /// Initialise a goscaffold configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 goscaffold init\n\
            \x20 goscaffold init --force\n\
            \x20 goscaffold --config ./goscaffold.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goscaffold completions bash > ~/.local/share/bash-completion/completions/goscaffold\n\
            \x20 goscaffold completions zsh  > ~/.zfunc/_goscaffold\n\
            \x20 goscaffold completions fish > ~/.config/fish/completions/goscaffold.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the goscaffold configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goscaffold config get defaults.template\n\
            \x20 goscaffold config set defaults.github_user octocat\n\
            \x20 goscaffold config set defaults.features.tests true\n\
            \x20 goscaffold config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `goscaffold new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name; also the name of the created directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        value_enum,
        help = "Project template"
    )]
    pub template: Option<TemplateArg>,

    #[arg(
        short = 'g',
        long = "github",
        value_name = "USER",
        help = "GitHub username for module path"
    )]
    pub github: Option<String>,

    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Custom module path (overrides --github)"
    )]
    pub module: Option<String>,

    // DevOps
    #[arg(long = "makefile", help = "Include Makefile", help_heading = "DevOps")]
    pub makefile: bool,

    #[arg(
        long = "docker",
        help = "Include Dockerfile and docker-compose",
        help_heading = "DevOps"
    )]
    pub docker: bool,

    #[arg(
        long = "ci",
        help = "Include GitHub Actions CI workflow",
        help_heading = "DevOps"
    )]
    pub ci: bool,

    #[arg(
        short = 'D',
        long = "all-devops",
        help = "Include all DevOps files",
        help_heading = "DevOps"
    )]
    pub all_devops: bool,

    // Code quality
    #[arg(
        long = "lint",
        help = "Include golangci-lint config",
        help_heading = "Code quality"
    )]
    pub lint: bool,

    #[arg(
        long = "precommit",
        help = "Include pre-commit hooks config",
        help_heading = "Code quality"
    )]
    pub precommit: bool,

    #[arg(
        long = "tests",
        help = "Include test file scaffolding",
        help_heading = "Code quality"
    )]
    pub tests: bool,

    #[arg(
        short = 'Q',
        long = "all-quality",
        help = "Include all quality tools",
        help_heading = "Code quality"
    )]
    pub all_quality: bool,

    #[arg(long = "git", help = "Initialize git repository")]
    pub git: bool,

    #[arg(long = "no-interactive", help = "Skip interactive prompts")]
    pub no_interactive: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory to create the project in (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Template names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateArg {
    Basic,
    Cli,
    #[value(alias = "rest")]
    Api,
    Grpc,
    #[value(alias = "lib")]
    Library,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Basic => Self::Basic,
            TemplateArg::Cli => Self::Cli,
            TemplateArg::Api => Self::Api,
            TemplateArg::Grpc => Self::Grpc,
            TemplateArg::Library => Self::Library,
        }
    }
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `goscaffold templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goscaffold init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goscaffold completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `goscaffold config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_short_flags() {
        let cli = Cli::parse_from([
            "goscaffold", "new", "mycli", "-t", "cli", "-g", "octocat", "-D", "-Q",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name.as_deref(), Some("mycli"));
        assert_eq!(args.template, Some(TemplateArg::Cli));
        assert_eq!(args.github.as_deref(), Some("octocat"));
        assert!(args.all_devops && args.all_quality);
        assert!(!args.makefile && !args.git);
    }

    #[test]
    fn name_is_optional_for_prompting() {
        let cli = Cli::parse_from(["goscaffold", "new"]);
        assert!(matches!(cli.command, Commands::New(NewArgs { name: None, .. })));
    }

    #[test]
    fn template_aliases() {
        let cli = Cli::parse_from(["goscaffold", "new", "x", "--template", "rest"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(TemplateKind::from(args.template.unwrap()), TemplateKind::Api);
    }

    #[test]
    fn unknown_template_is_rejected() {
        assert!(Cli::try_parse_from(["goscaffold", "new", "x", "-t", "rails"]).is_err());
    }

    #[test]
    fn templates_has_ls_alias() {
        let cli = Cli::parse_from(["goscaffold", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Templates(TemplatesArgs {
                format: ListFormat::Json
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["goscaffold", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["goscaffold", "version", "-vv", "--log-file", "out.log"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("out.log")));
    }
}
