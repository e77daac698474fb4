//! Implementation of the `goscaffold templates` command.

use serde::Serialize;

use goscaffold_core::domain::TemplateKind;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Serialisable view of one template kind.
#[derive(Debug, Serialize)]
struct TemplateInfo {
    name: &'static str,
    description: &'static str,
}

fn catalogue() -> Vec<TemplateInfo> {
    TemplateKind::ALL
        .iter()
        .map(|k| TemplateInfo {
            name: k.as_str(),
            description: k.description(),
        })
        .collect()
}

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let templates = catalogue();

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            output.print("")?;
            for t in &templates {
                output.print(&format!("  {:<9} {}", t.name, t.description))?;
            }
            output.print("")?;
            output.print("Use: goscaffold new <name> --template <template>")?;
        }
        ListFormat::List => {
            for t in &templates {
                output.data(t.name)?;
            }
        }
        ListFormat::Json => {
            // JSON must stay parseable in pipes, so it bypasses quiet mode.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::InvalidInput {
                    message: "failed to serialise template list".into(),
                    source: Some(Box::new(e)),
                }
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_matches_selectable_kinds() {
        let names: Vec<_> = catalogue().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["basic", "cli", "api", "grpc", "library"]);
    }

    #[test]
    fn json_shape() {
        let value = serde_json::to_value(catalogue()).unwrap();
        assert_eq!(value[1]["name"], "cli");
        assert_eq!(value[1]["description"], "CLI application with Cobra");
    }
}
