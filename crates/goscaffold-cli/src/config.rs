//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOSCAFFOLD_<SECTION>__<KEY>`, for example
//!    `GOSCAFFOLD_DEFAULTS__GITHUB_USER=octocat`
//! 3. Config file (TOML; `--config` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use goscaffold_core::domain::{Features, TemplateKind};
use serde::{Deserialize, Deserializer, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GOSCAFFOLD";

/// Keys accepted by `config get` / `config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.template",
    "defaults.github_user",
    "defaults.features.makefile",
    "defaults.features.docker",
    "defaults.features.ci",
    "defaults.features.lint",
    "defaults.features.precommit",
    "defaults.features.tests",
    "defaults.features.git",
    "output.no_color",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Values used by `new` when neither a flag nor a prompt supplies one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Unrecognised names deserialize to [`TemplateKind::Unknown`].
    #[serde(deserialize_with = "lenient_template")]
    pub template: TemplateKind,
    pub github_user: Option<String>,
    pub features: Features,
}

/// The `config` deserializer ignores `#[serde(other)]`, so names are parsed
/// by hand.
fn lenient_template<'de, D>(deserializer: D) -> Result<TemplateKind, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(name.parse().unwrap_or(TemplateKind::Unknown))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicitly passed `config_file` must exist; the default location
    /// is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("failed to encode defaults")?,
            )
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goscaffold.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "goscaffold", "goscaffold")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".goscaffold.toml"))
    }

    /// The file `config set` and `init` write to.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration")
    }

    /// Look up a dotted key and render its value for display.
    pub fn get(&self, key: &str) -> Option<String> {
        let f = &self.defaults.features;
        let value = match key {
            "defaults.template" => self.defaults.template.to_string(),
            "defaults.github_user" => self.defaults.github_user.clone().unwrap_or_default(),
            "defaults.features.makefile" => f.makefile.to_string(),
            "defaults.features.docker" => f.docker.to_string(),
            "defaults.features.ci" => f.ci.to_string(),
            "defaults.features.lint" => f.lint.to_string(),
            "defaults.features.precommit" => f.precommit.to_string(),
            "defaults.features.tests" => f.tests.to_string(),
            "defaults.features.git" => f.git.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every known key with its current value, in [`KNOWN_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KNOWN_KEYS
            .iter()
            .filter_map(|&k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}
