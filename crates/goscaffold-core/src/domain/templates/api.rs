use crate::domain::entities::{Artifact, ProjectConfig, RenderContext};

const MAIN_GO: &str = r#"package main

import (
	"log"
	"net/http"

	"{{MODULE_PATH}}/internal/router"
)

func main() {
	r := router.New()

	log.Println("Server starting on :8080")
	if err := http.ListenAndServe(":8080", r); err != nil {
		log.Fatal(err)
	}
}
"#;

const ROUTER_GO: &str = r#"package router

import (
	"github.com/go-chi/chi/v5"
	"github.com/go-chi/chi/v5/middleware"

	"{{MODULE_PATH}}/internal/handler"
	mw "{{MODULE_PATH}}/internal/middleware"
)

// New creates a new router with all routes configured
func New() *chi.Mux {
	r := chi.NewRouter()

	// Middleware
	r.Use(middleware.Logger)
	r.Use(middleware.Recoverer)
	r.Use(middleware.RequestID)
	r.Use(mw.ContentType)

	// Routes
	r.Get("/", handler.Home)
	r.Get("/health", handler.Health)

	// API routes
	r.Route("/api/v1", func(r chi.Router) {
		r.Get("/hello", handler.Hello)
	})

	return r
}
"#;

const HANDLER_GO: &str = r#"package handler

import (
	"encoding/json"
	"net/http"
)

// Response is a generic API response
type Response struct {
	Message string `json:"message"`
	Status  int    `json:"status"`
}

// Home handles the root endpoint
func Home(w http.ResponseWriter, r *http.Request) {
	respond(w, http.StatusOK, Response{
		Message: "Welcome to the API",
		Status:  http.StatusOK,
	})
}

// Health handles health check endpoint
func Health(w http.ResponseWriter, r *http.Request) {
	respond(w, http.StatusOK, Response{
		Message: "OK",
		Status:  http.StatusOK,
	})
}

// Hello handles the hello endpoint
func Hello(w http.ResponseWriter, r *http.Request) {
	respond(w, http.StatusOK, Response{
		Message: "Hello, World!",
		Status:  http.StatusOK,
	})
}

func respond(w http.ResponseWriter, status int, data interface{}) {
	w.WriteHeader(status)
	json.NewEncoder(w).Encode(data)
}
"#;

const MIDDLEWARE_GO: &str = r#"package middleware

import "net/http"

// ContentType sets the Content-Type header to application/json
func ContentType(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		w.Header().Set("Content-Type", "application/json")
		next.ServeHTTP(w, r)
	})
}
"#;

const HANDLER_TEST_GO: &str = r#"package handler

import (
	"net/http"
	"net/http/httptest"
	"testing"
)

func TestHealth(t *testing.T) {
	req := httptest.NewRequest(http.MethodGet, "/health", nil)
	w := httptest.NewRecorder()

	Health(w, req)

	if w.Code != http.StatusOK {
		t.Errorf("expected status %d, got %d", http.StatusOK, w.Code)
	}
}
"#;

pub(super) fn build(config: &ProjectConfig) -> Vec<Artifact> {
    let ctx = RenderContext::new(config);
    let name = config.name();

    let mut files = vec![
        ctx.artifact(format!("cmd/{name}/main.go"), MAIN_GO),
        ctx.artifact("internal/router/router.go", ROUTER_GO),
        ctx.artifact("internal/handler/handler.go", HANDLER_GO),
        ctx.artifact("internal/middleware/middleware.go", MIDDLEWARE_GO),
    ];
    if config.features().tests {
        files.push(ctx.artifact("internal/handler/handler_test.go", HANDLER_TEST_GO));
    }
    files
}
