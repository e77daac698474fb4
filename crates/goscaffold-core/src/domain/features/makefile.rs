use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};
use crate::domain::value_objects::TemplateKind;

const MAKEFILE: &str = r#"# Project variables
BINARY_NAME={{PROJECT_NAME}}
PKG={{MODULE_PATH}}

# Go commands
GOCMD=go
GOBUILD=$(GOCMD) build
GOTEST=$(GOCMD) test
GOGET=$(GOCMD) get
GOMOD=$(GOCMD) mod
GOLINT=golangci-lint

# Build flags
LDFLAGS=-ldflags "-s -w"

.PHONY: all build clean test lint run tidy help

all: lint test build

## build: Build the binary
build:
	$(GOBUILD) $(LDFLAGS) -o bin/$(BINARY_NAME) ./cmd/$(BINARY_NAME)

## clean: Clean build artifacts
clean:
	rm -rf bin/
	rm -f coverage.out

## test: Run tests
test:
	$(GOTEST) -v -race -coverprofile=coverage.out ./...

## lint: Run linter
lint:
	$(GOLINT) run ./...

## run: Run the application
run:
	{{RUN_TARGET}}

## tidy: Tidy dependencies
tidy:
	$(GOMOD) tidy

## help: Show this help
help:
	@echo "Available targets:"
	@sed -n 's/^##//p' $(MAKEFILE_LIST) | column -t -s ':' | sed -e 's/^/ /'
"#;

/// Command behind `make run` for a project of the given kind.
pub(crate) fn run_command(kind: TemplateKind, name: &str) -> String {
    match kind {
        TemplateKind::Basic => "go run .".to_string(),
        TemplateKind::Library => "go run ./examples/basic".to_string(),
        _ => format!("go run ./cmd/{name}"),
    }
}

pub fn makefile(config: &ProjectConfig) -> Artifact {
    RenderContext::new(config)
        .with_variable("RUN_TARGET", run_command(config.template(), config.name()))
        .artifact("Makefile", MAKEFILE)
}
