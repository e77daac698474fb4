use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const MAIN_GO: &str = r#"package main

import (
	"log"
	"net"

	"{{MODULE_PATH}}/internal/server"
	"google.golang.org/grpc"
)

func main() {
	lis, err := net.Listen("tcp", ":50051")
	if err != nil {
		log.Fatalf("failed to listen: %v", err)
	}

	s := grpc.NewServer()
	server.Register(s)

	log.Println("gRPC server starting on :50051")
	if err := s.Serve(lis); err != nil {
		log.Fatalf("failed to serve: %v", err)
	}
}
"#;

const SERVER_GO: &str = r#"package server

import (
	"context"

	"google.golang.org/grpc"
)

// GreeterServer implements the Greeter service
type GreeterServer struct{}

// Register registers the server with gRPC
func Register(s *grpc.Server) {
	// Register your gRPC services here
	// pb.RegisterGreeterServer(s, &GreeterServer{})
}

// SayHello implements the SayHello RPC
func (s *GreeterServer) SayHello(ctx context.Context, name string) (string, error) {
	return "Hello, " + name + "!", nil
}
"#;

const PROTO: &str = r#"syntax = "proto3";

package {{PROJECT_NAME}};

option go_package = "{{MODULE_PATH}}/pkg/pb";

service Greeter {
  rpc SayHello (HelloRequest) returns (HelloReply) {}
}

message HelloRequest {
  string name = 1;
}

message HelloReply {
  string message = 1;
}
"#;

const SERVER_TEST_GO: &str = r#"package server

import (
	"context"
	"testing"
)

func TestSayHello(t *testing.T) {
	s := &GreeterServer{}

	got, err := s.SayHello(context.Background(), "gopher")
	if err != nil {
		t.Fatalf("unexpected error: %v", err)
	}
	if got != "Hello, gopher!" {
		t.Errorf("expected %q, got %q", "Hello, gopher!", got)
	}
}
"#;

pub(super) fn build(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);
    let name = config.name();

    let mut files = vec![
        ctx.artifact(format!("cmd/{name}/main.go"), MAIN_GO),
        ctx.artifact("internal/server/server.go", SERVER_GO),
        ctx.artifact(format!("proto/{name}.proto"), PROTO),
    ];
    if config.features().tests {
        files.push(ctx.artifact("internal/server/server_test.go", SERVER_TEST_GO));
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn files() -> Vec<Artifact> {
        build(&ProjectConfig::new("greeter", "github.com/acme/greeter"))
    }

    #[test]
    fn binds_tcp_50051() {
        let main = &files()[0].content;
        assert!(main.contains("net.Listen(\"tcp\", \":50051\")"));
        assert!(main.contains("server.Register(s)"));
        assert!(main.contains("log.Fatalf(\"failed to listen: %v\", err)"));
    }

    #[test]
    fn server_has_single_illustrative_method() {
        let server = &files()[1].content;
        assert_eq!(server.matches("func (s *GreeterServer)").count(), 1);
    }

    #[test]
    fn proto_named_after_project() {
        let files = files();
        assert_eq!(files[2].path.as_path(), Path::new("proto/greeter.proto"));
        let proto = &files[2].content;
        assert!(proto.contains("package greeter;"));
        assert!(proto.contains("option go_package = \"github.com/acme/greeter/pkg/pb\";"));
        assert!(proto.contains("rpc SayHello (HelloRequest) returns (HelloReply) {}"));
    }
}
