//! `goscaffold config`: read and write configuration values.

use std::path::Path;

use goscaffold_core::domain::TemplateKind;

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key })?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            set_in_file(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            for (key, value) in config.entries() {
                output.print(&format!("  {key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Read `path` (missing is fine), set `key`, and write it back.
fn set_in_file(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut doc = match std::fs::read_to_string(path) {
        Ok(text) => toml::from_str::<toml::Table>(&text)
            .map_err(|e| CliError::config(format!("cannot parse {}", path.display()), e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => {
            return Err(e).with_cli_context(|| format!("failed to read {}", path.display()));
        }
    };

    set_value(&mut doc, key, value)?;

    let text = toml::to_string_pretty(&doc)
        .map_err(|e| CliError::config("failed to serialise configuration", e))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, text).with_cli_context(|| format!("failed to write {}", path.display()))
}

/// Validate `raw` for `key` and store it in `doc`, creating tables as needed.
fn set_value(doc: &mut toml::Table, key: &str, raw: &str) -> CliResult<()> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }

    let value = match key {
        "defaults.template" => {
            let kind: TemplateKind = raw.parse().map_err(|e| CliError::InvalidInput {
                message: format!("{e}"),
                source: Some(Box::new(e)),
            })?;
            toml::Value::String(kind.as_str().into())
        }
        "defaults.github_user" => toml::Value::String(raw.trim().into()),
        _ => toml::Value::Boolean(parse_bool(raw).ok_or_else(|| CliError::InvalidInput {
            message: format!("'{raw}' is not a boolean (use true or false) for {key}"),
            source: None,
        })?),
    };

    let mut segments: Vec<&str> = key.split('.').collect();
    let Some(leaf) = segments.pop() else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };

    let mut table = doc;
    for segment in segments {
        table = table
            .entry(segment)
            .or_insert(toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .ok_or_else(|| CliError::ConfigError {
                message: format!("'{segment}' is not a table in the config file"),
                source: None,
            })?;
    }
    table.insert(leaf.to_string(), value);
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_nested_tables() {
        let mut doc = toml::Table::new();
        set_value(&mut doc, "defaults.features.docker", "true").unwrap();
        set_value(&mut doc, "defaults.template", "API").unwrap();

        assert_eq!(doc["defaults"]["features"]["docker"], toml::Value::Boolean(true));
        assert_eq!(doc["defaults"]["template"], toml::Value::String("api".into()));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut doc = toml::Table::new();
        assert!(matches!(
            set_value(&mut doc, "defaults.language", "go"),
            Err(CliError::UnknownConfigKey { .. })
        ));
        assert!(doc.is_empty());
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut doc = toml::Table::new();
        assert!(matches!(
            set_value(&mut doc, "output.no_color", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            set_value(&mut doc, "defaults.template", "rails"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn scalar_in_the_way_is_a_config_error() {
        let mut doc: toml::Table = toml::from_str("defaults = 3\n").unwrap();
        assert!(matches!(
            set_value(&mut doc, "defaults.github_user", "octocat"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn written_file_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        set_in_file(&path, "defaults.github_user", "octocat").unwrap();
        set_in_file(&path, "defaults.features.tests", "yes").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.github_user.as_deref(), Some("octocat"));
        assert!(cfg.defaults.features.tests);
        assert_eq!(cfg.defaults.template, TemplateKind::Basic);
    }
}
