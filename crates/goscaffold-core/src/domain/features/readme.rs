use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};
use crate::domain::value_objects::TemplateKind;

use super::GO_VERSION;

const README: &str = r#"# {{PROJECT_NAME}}

{{DESCRIPTION}}

## Installation

```bash
go get {{MODULE_PATH}}
```

## Usage

{{USAGE}}

## Development

### Prerequisites

- Go {{GO_VERSION}} or later
"#;

const MAKE_COMMANDS: &str = r#"
### Available Commands

```bash
make help    # Show available commands
make build   # Build the binary
make test    # Run tests
make lint    # Run linter
make run     # Run the application
```
"#;

const LICENSE: &str = "\n## License\n\nMIT License\n";

fn description(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Cli => "A command-line application built with Go and Cobra.",
        TemplateKind::Api => "A REST API built with Go and Chi router.",
        TemplateKind::Grpc => "A gRPC service built with Go.",
        TemplateKind::Library => "A reusable Go library.",
        TemplateKind::Basic | TemplateKind::Unknown => "A Go project.",
    }
}

fn usage(config: &ProjectConfig) -> String {
    let name = config.name();
    match config.template() {
        TemplateKind::Cli => format!("```bash\ngo run ./cmd/{name}\n```"),
        TemplateKind::Api => format!(
            "```bash\ngo run ./cmd/{name}\n# Server starts on :8080\ncurl http://localhost:8080/health\n```"
        ),
        TemplateKind::Grpc => {
            format!("```bash\ngo run ./cmd/{name}\n# Server starts on :50051\n```")
        }
        TemplateKind::Library => format!(
            "```go\nimport \"{module}/pkg/{name}\"\n\nfunc main() {{\n    result := {name}.Example()\n}}\n```",
            module = config.module_path()
        ),
        TemplateKind::Basic | TemplateKind::Unknown => "```bash\ngo run .\n```".to_string(),
    }
}

/// `README.md`; the command reference is only included alongside a Makefile.
pub fn readme(config: &ProjectConfig) -> Artifact {
    let ctx = RenderContext::new(config)
        .with_variable("DESCRIPTION", description(config.template()))
        .with_variable("USAGE", usage(config))
        .with_variable("GO_VERSION", GO_VERSION);

    let mut content = ctx.render(README);
    if config.features().makefile {
        content.push_str(MAKE_COMMANDS);
    }
    content.push_str(LICENSE);

    Artifact::new("README.md", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Features;

    fn config(kind: TemplateKind, makefile: bool) -> ProjectConfig {
        ProjectConfig::new("widget", "github.com/acme/widget")
            .with_template(kind)
            .with_features(Features {
                makefile,
                ..Features::none()
            })
    }

    #[test]
    fn sections_in_order() {
        let content = readme(&config(TemplateKind::Basic, true)).content;
        let headings: Vec<_> = content.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(
            headings,
            vec![
                "# widget",
                "## Installation",
                "## Usage",
                "## Development",
                "### Prerequisites",
                "### Available Commands",
                "## License"
            ]
        );
        assert!(content.contains("go get github.com/acme/widget\n"));
        assert!(content.contains("- Go 1.21 or later\n"));
        assert!(content.ends_with("## License\n\nMIT License\n"));
    }

    #[test]
    fn commands_section_only_with_makefile() {
        assert!(readme(&config(TemplateKind::Cli, true)).content.contains("make help"));
        assert!(!readme(&config(TemplateKind::Cli, false)).content.contains("Available Commands"));
    }

    #[test]
    fn usage_differs_per_kind() {
        let bodies: Vec<_> = TemplateKind::ALL
            .into_iter()
            .map(|k| readme(&config(k, false)).content)
            .collect();
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn api_usage_mentions_health_check() {
        let content = readme(&config(TemplateKind::Api, false)).content;
        assert!(content.contains("A REST API built with Go and Chi router."));
        assert!(content.contains("# Server starts on :8080\ncurl http://localhost:8080/health"));
    }

    #[test]
    fn library_usage_imports_package() {
        let content = readme(&config(TemplateKind::Library, false)).content;
        assert!(content.contains("import \"github.com/acme/widget/pkg/widget\""));
        assert!(content.contains("result := widget.Example()"));
    }

    #[test]
    fn unknown_kind_reads_like_basic() {
        assert_eq!(
            readme(&config(TemplateKind::Unknown, false)),
            readme(&config(TemplateKind::Basic, false))
        );
    }
}
