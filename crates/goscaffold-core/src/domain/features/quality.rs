use crate::domain::entities::Artifact;

const GOLANGCI: &str = r#"run:
  timeout: 5m

linters:
  enable:
    - errcheck
    - gosimple
    - govet
    - ineffassign
    - staticcheck
    - unused
    - gofmt
    - goimports
    - misspell
    - unconvert

linters-settings:
  gofmt:
    simplify: true
  goimports:
    local-prefixes: github.com

issues:
  exclude-rules:
    - path: _test\.go
      linters:
        - errcheck
"#;

const PRE_COMMIT: &str = r#"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: check-yaml
      - id: check-added-large-files

  - repo: https://github.com/golangci/golangci-lint
    rev: v1.55.2
    hooks:
      - id: golangci-lint

  - repo: local
    hooks:
      - id: go-mod-tidy
        name: go mod tidy
        entry: go mod tidy
        language: system
        pass_filenames: false
"#;

/// `.golangci.yml`.
pub fn lint_config() -> Artifact {
    Artifact::new(".golangci.yml", GOLANGCI)
}

/// `.pre-commit-config.yaml`.
pub fn precommit_config() -> Artifact {
    Artifact::new(".pre-commit-config.yaml", PRE_COMMIT)
}
