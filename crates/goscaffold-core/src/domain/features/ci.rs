use crate::domain::entities::Artifact;

const WORKFLOW: &str = r#"name: CI

on:
  push:
    branches: [ main, master ]
  pull_request:
    branches: [ main, master ]

jobs:
  build:
    runs-on: ubuntu-latest

    steps:
    - uses: actions/checkout@v4

    - name: Set up Go
      uses: actions/setup-go@v5
      with:
        go-version: '1.21'

    - name: Install dependencies
      run: go mod download

    - name: Run golangci-lint
      uses: golangci/golangci-lint-action@v4
      with:
        version: latest

    - name: Run tests
      run: go test -v -race -coverprofile=coverage.out ./...

    - name: Build
      run: go build -v ./...
"#;

/// GitHub Actions workflow at `.github/workflows/ci.yml`.
pub fn ci_workflow() -> Artifact {
    Artifact::new(".github/workflows/ci.yml", WORKFLOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_job_in_order() {
        let a = ci_workflow();
        let steps: Vec<_> = a
            .content
            .lines()
            .filter_map(|l| l.trim().strip_prefix("- name: "))
            .collect();
        assert_eq!(
            steps,
            vec!["Set up Go", "Install dependencies", "Run golangci-lint", "Run tests", "Build"]
        );
        assert_eq!(a.content.matches("runs-on:").count(), 1);
        assert_eq!(a.content.matches("branches: [ main, master ]").count(), 2);
    }
}
