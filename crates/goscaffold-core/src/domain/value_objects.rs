//! Domain value objects: the template kind enumeration.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `description` and `FromStr` arms here
//! 3. Add a directory layout in `planner.rs` and a builder in `templates/`
//! 4. Give the README and Makefile builders a `match` arm

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fixed set of starter files to generate.
///
/// `Unknown` is never produced by [`FromStr`]; it only appears when a
/// configuration source (for example a config file) names a kind this
/// version does not know. The planner and builders fall back gracefully
/// for it instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Basic,
    Cli,
    Api,
    Grpc,
    Library,
    #[serde(other)]
    Unknown,
}

impl TemplateKind {
    /// Every selectable kind, in menu order.
    pub const ALL: [TemplateKind; 5] = [
        Self::Basic,
        Self::Cli,
        Self::Api,
        Self::Grpc,
        Self::Library,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cli => "cli",
            Self::Api => "api",
            Self::Grpc => "grpc",
            Self::Library => "library",
            Self::Unknown => "unknown",
        }
    }

    /// One-line description used by `templates` listings and prompts.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Minimal Go project",
            Self::Cli => "CLI application with Cobra",
            Self::Api => "REST API with Chi router",
            Self::Grpc => "gRPC service with proto files",
            Self::Library => "Reusable Go library",
            Self::Unknown => "Unrecognized template (generic layout)",
        }
    }

    /// Whether the project's entry point lives under `cmd/<name>`.
    pub const fn has_cmd_entry_point(&self) -> bool {
        matches!(self, Self::Cli | Self::Api | Self::Grpc)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "cli" => Ok(Self::Cli),
            "api" | "rest" => Ok(Self::Api),
            "grpc" => Ok(Self::Grpc),
            "library" | "lib" => Ok(Self::Library),
            other => Err(DomainError::UnknownTemplateKind(other.to_string())),
        }
    }
}
