use std::collections::BTreeMap;

use crate::domain::entities::{common::RelativePath, config::ProjectConfig};

/// One file to be written, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: RelativePath,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Variable substitution for built-in file bodies.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "widget" |
/// | `MODULE_PATH` | "github.com/acme/widget" |
///
/// Unknown placeholders are left as-is.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(config: &ProjectConfig) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("PROJECT_NAME", config.name().to_string());
        variables.insert("MODULE_PATH", config.module_path().to_string());
        Self { variables }
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder in `template`.
    ///
    /// Single pass: substituted values are never scanned again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let inner = &rest[start + 2..];
            let value = inner
                .find("}}")
                .and_then(|end| self.get(&inner[..end]).map(|v| (v, end)));

            match value {
                Some((value, end)) => {
                    result.push_str(value);
                    rest = &inner[end + 2..];
                }
                None => {
                    result.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Render `template` into an artifact at `path`.
    pub fn artifact(&self, path: impl Into<RelativePath>, template: &str) -> Artifact {
        Artifact::new(path, self.render(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new(&ProjectConfig::new("widget", "github.com/acme/widget"))
    }

    #[test]
    fn standard_variables() {
        let ctx = ctx();
        assert_eq!(ctx.get("PROJECT_NAME"), Some("widget"));
        assert_eq!(ctx.get("MODULE_PATH"), Some("github.com/acme/widget"));
    }

    #[test]
    fn renders_repeated_placeholders() {
        assert_eq!(
            ctx().render("{{PROJECT_NAME}}/{{MODULE_PATH}}/{{PROJECT_NAME}}"),
            "widget/github.com/acme/widget/widget"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(ctx().render("{{AUTHOR}}"), "{{AUTHOR}}");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let ctx = RenderContext::new(&ProjectConfig::new(
            "widget",
            "example.com/{{PROJECT_NAME}}",
        ));
        assert_eq!(
            ctx.render("module {{MODULE_PATH}}\n"),
            "module example.com/{{PROJECT_NAME}}\n"
        );
    }

    #[test]
    fn stray_braces_are_copied() {
        assert_eq!(ctx().render("{{{PROJECT_NAME}}}"), "{widget}");
        assert_eq!(ctx().render("open {{ only"), "open {{ only");
        assert_eq!(ctx().render("{{PROJECT_NAME"), "{{PROJECT_NAME");
    }

    #[test]
    fn custom_variable() {
        let ctx = ctx().with_variable("RUN_TARGET", "go run .");
        assert_eq!(ctx.render("run: {{RUN_TARGET}}"), "run: go run .");
    }

    #[test]
    fn go_braces_survive_rendering() {
        let body = "func main() {\n\tfmt.Println(\"Hello from {{PROJECT_NAME}}!\")\n}\n";
        assert_eq!(
            ctx().render(body),
            "func main() {\n\tfmt.Println(\"Hello from widget!\")\n}\n"
        );
    }
}
