use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

use super::GO_VERSION;

const GO_MOD: &str = "module {{MODULE_PATH}}\n\ngo {{GO_VERSION}}\n";

const GITIGNORE: &str = r#"# Binaries
bin/
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary
*.test

# Output of go coverage
*.out

# Dependency directories
vendor/

# IDE
.idea/
.vscode/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Environment
.env
.env.local

# Build
dist/

# Logs
*.log
"#;

/// `go.mod` declaring the module path.
pub fn manifest(config: &ProjectConfig) -> Artifact {
    RenderContext::new(config)
        .with_variable("GO_VERSION", GO_VERSION)
        .artifact("go.mod", GO_MOD)
}

/// `.gitignore`; identical for every project.
pub fn gitignore() -> Artifact {
    Artifact::new(".gitignore", GITIGNORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_declares_module_and_go_version() {
        let a = manifest(&ProjectConfig::new("widget", "github.com/acme/widget"));
        assert_eq!(a.path.as_path(), std::path::Path::new("go.mod"));
        assert_eq!(a.content, "module github.com/acme/widget\n\ngo 1.21\n");
    }

    #[test]
    fn gitignore_covers_build_outputs_and_secrets() {
        let a = gitignore();
        for pattern in ["bin/", "*.test", "*.out", "vendor/", ".env", "dist/", "*.log"] {
            assert!(
                a.content.lines().any(|l| l == pattern),
                "missing {pattern}"
            );
        }
    }
}
