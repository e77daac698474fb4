use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const MAIN_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello from {{PROJECT_NAME}}!")
}
"#;

const MAIN_TEST_GO: &str = r#"package main

import "testing"

func TestMain(t *testing.T) {
	// Add your tests here
}
"#;

pub(super) fn build(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);

    let mut files = vec![ctx.artifact("main.go", MAIN_GO)];
    if config.features().tests {
        files.push(ctx.artifact("main_test.go", MAIN_TEST_GO));
    }
    files
}
