use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const DOCKERFILE: &str = r#"# Build stage
FROM golang:1.21-alpine AS builder

WORKDIR /app

# Copy go mod files
COPY go.mod go.sum* ./
RUN go mod download

# Copy source
COPY . .

# Build
RUN CGO_ENABLED=0 GOOS=linux go build -ldflags="-s -w" -o /{{PROJECT_NAME}} ./cmd/{{PROJECT_NAME}}

# Final stage
FROM alpine:latest

RUN apk --no-cache add ca-certificates

WORKDIR /root/

COPY --from=builder /{{PROJECT_NAME}} .

EXPOSE 8080

CMD ["./{{PROJECT_NAME}}"]
"#;

const COMPOSE: &str = r#"version: '3.8'

services:
  {{PROJECT_NAME}}:
    build: .
    ports:
      - "8080:8080"
    environment:
      - ENV=development
    restart: unless-stopped
"#;

/// `Dockerfile` followed by `docker-compose.yml`.
pub fn docker_files(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);
    vec![
        ctx.artifact("Dockerfile", DOCKERFILE),
        ctx.artifact("docker-compose.yml", COMPOSE),
    ]
}
