use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const MAIN_GO: &str = r#"package main

import (
	"os"

	"{{MODULE_PATH}}/internal/cmd"
)

func main() {
	if err := cmd.Execute(); err != nil {
		os.Exit(1)
	}
}
"#;

const ROOT_GO: &str = r#"package cmd

import (
	"fmt"

	"github.com/spf13/cobra"
)

var rootCmd = &cobra.Command{
	Use:   "{{PROJECT_NAME}}",
	Short: "A brief description of your application",
	Long: `{{PROJECT_NAME}} is a CLI application.

Add a longer description here.`,
	Run: func(cmd *cobra.Command, args []string) {
		fmt.Println("Welcome to {{PROJECT_NAME}}!")
		fmt.Println("Use --help to see available commands.")
	},
}

// Execute runs the root command
func Execute() error {
	return rootCmd.Execute()
}

func init() {
	// Add global flags here
	// rootCmd.PersistentFlags().StringVar(&cfgFile, "config", "", "config file")
}
"#;

const VERSION_GO: &str = r#"package cmd

import (
	"fmt"

	"github.com/spf13/cobra"
)

var versionCmd = &cobra.Command{
	Use:   "version",
	Short: "Print version information",
	Run: func(cmd *cobra.Command, args []string) {
		fmt.Println("v0.1.0")
	},
}

func init() {
	rootCmd.AddCommand(versionCmd)
}
"#;

const ROOT_TEST_GO: &str = r#"package cmd

import "testing"

func TestRootCommandName(t *testing.T) {
	if rootCmd.Use != "{{PROJECT_NAME}}" {
		t.Errorf("expected command name %q, got %q", "{{PROJECT_NAME}}", rootCmd.Use)
	}
}
"#;

pub(super) fn build(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);
    let name = config.name();

    let mut files = vec![
        ctx.artifact(format!("cmd/{name}/main.go"), MAIN_GO),
        ctx.artifact("internal/cmd/root.go", ROOT_GO),
        ctx.artifact("internal/cmd/version.go", VERSION_GO),
    ];
    if config.features().tests {
        files.push(ctx.artifact("internal/cmd/root_test.go", ROOT_TEST_GO));
    }
    files
}
