use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const LIB_GO: &str = r#"// Package {{PROJECT_NAME}} provides functionality for...
package {{PROJECT_NAME}}

// Version is the current version of the library
const Version = "0.1.0"

// Example is an example function
func Example() string {
	return "Hello from {{PROJECT_NAME}} library!"
}
"#;

const EXAMPLE_GO: &str = r#"//go:build ignore

package main

import (
	"fmt"

	"{{MODULE_PATH}}/pkg/{{PROJECT_NAME}}"
)

func main() {
	fmt.Println({{PROJECT_NAME}}.Example())
}
"#;

const LIB_TEST_GO: &str = r#"package {{PROJECT_NAME}}

import "testing"

func TestExample(t *testing.T) {
	result := Example()
	expected := "Hello from {{PROJECT_NAME}} library!"

	if result != expected {
		t.Errorf("expected %q, got %q", expected, result)
	}
}
"#;

pub(super) fn build(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);
    let name = config.name();

    let mut files = vec![
        ctx.artifact(format!("pkg/{name}/{name}.go"), LIB_GO),
        ctx.artifact("examples/basic/main.go", EXAMPLE_GO),
    ];
    if config.features().tests {
        files.push(ctx.artifact(format!("pkg/{name}/{name}_test.go"), LIB_TEST_GO));
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Features;
    use std::path::Path;

    #[test]
    fn example_returns_exact_greeting() {
        let files = build(&ProjectConfig::new("widget", "github.com/acme/widget"));
        assert_eq!(files[0].path.as_path(), Path::new("pkg/widget/widget.go"));
        assert!(files[0].content.contains("return \"Hello from widget library!\""));
        assert!(files[0].content.contains("const Version = \"0.1.0\""));
    }

    #[test]
    fn example_usage_is_excluded_from_builds() {
        let files = build(&ProjectConfig::new("widget", "github.com/acme/widget"));
        assert!(files[1].content.starts_with("//go:build ignore\n"));
        assert!(files[1].content.contains("\"github.com/acme/widget/pkg/widget\""));
        assert!(files[1].content.contains("fmt.Println(widget.Example())"));
    }

    #[test]
    fn test_file_asserts_return_value() {
        let cfg = ProjectConfig::new("widget", "github.com/acme/widget").with_features(Features {
            tests: true,
            ..Features::none()
        });
        let files = build(&cfg);
        assert_eq!(files[2].path.as_path(), Path::new("pkg/widget/widget_test.go"));
        assert!(files[2].content.contains("expected := \"Hello from widget library!\""));
    }
}
