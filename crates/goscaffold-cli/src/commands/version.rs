//! `goscaffold version`: print build information.

use crate::{error::CliResult, output::OutputManager};

/// Version, commit and build date; the latter two are injected at build
/// time through `GOSCAFFOLD_COMMIT` and `GOSCAFFOLD_BUILD_DATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub built: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: match option_env!("GOSCAFFOLD_COMMIT") {
                Some(c) => c,
                None => "none",
            },
            built: match option_env!("GOSCAFFOLD_BUILD_DATE") {
                Some(d) => d,
                None => "unknown",
            },
        }
    }
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let info = BuildInfo::current();
    output.print("")?;
    output.kv("goscaffold", info.version)?;
    output.kv("commit", info.commit)?;
    output.kv("built", info.built)?;
    output.print("")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comes_from_cargo() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.commit.is_empty());
        assert!(!info.built.is_empty());
    }
}
