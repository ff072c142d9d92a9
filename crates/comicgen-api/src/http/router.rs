//! Axum router configuration with middleware.
//!
//! Routes:
//! - `GET /` serves the configured index document
//! - `POST /generate-comic`, `POST /generate-mnemonic`
//! - `GET /health`
//! - `/public/*` and `/images/*` serve their directories
//!
//! Any other path falls through to the public directory, then the images
//! directory. With the pipeline writing into the public directory, panels
//! are served at `/{request_id}/panel_N.png` (and under `/public`) for the
//! per-request namespace, where the id comes from the `x-comic-request-id`
//! response header, or at `/panel_N.png` for the shared namespace.
//! Middleware: CORS (exposing the request id header), tracing.

use axum::Router;
use axum::routing::{get, get_service, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([handlers::comic::REQUEST_ID_HEADER]);

    let server = &state.config.server;
    let index = ServeFile::new(&server.index_file);
    let static_root = ServeDir::new(&server.public_dir).fallback(ServeDir::new(&server.images_dir));

    Router::new()
        .route("/", get_service(index))
        .route("/generate-comic", post(handlers::comic::generate_comic))
        .route("/generate-mnemonic", post(handlers::mnemonic::generate_mnemonic))
        .route("/health", get(health_check))
        .nest_service("/public", ServeDir::new(&server.public_dir))
        .nest_service("/images", ServeDir::new(&server.images_dir))
        .fallback_service(static_root)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use comicgen_types::config::AppConfig;
    use comicgen_types::pipeline::NamespacePolicy;

    use crate::http::handlers::comic::REQUEST_ID_HEADER;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    /// Serve a fake upstream: Gemini answers `gemini_reply` at `/gemini`,
    /// Hugging Face answers PNG bytes at `/hf`.
    async fn spawn_upstream(gemini_reply: (StatusCode, Value)) -> String {
        let router = Router::new()
            .route(
                "/gemini",
                post(move || {
                    let (status, body) = gemini_reply.clone();
                    async move { (status, axum::Json(body)) }
                }),
            )
            .route("/hf", post(|| async { PNG }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn script(panels: usize) -> String {
        (1..=panels)
            .map(|k| {
                format!(
                    "## Panel {k}\n\n**Characters:** cat {k}\n**Background:** roof {k}\n**Text:** Cat: \"Meow {k}.\"\n\n"
                )
            })
            .collect()
    }

    fn candidate(text: &str) -> (StatusCode, Value) {
        (
            StatusCode::OK,
            json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }),
        )
    }

    struct TestApp {
        router: Router,
        dir: TempDir,
    }

    impl TestApp {
        fn output_dir(&self) -> std::path::PathBuf {
            self.dir.path().join("public")
        }
    }

    async fn test_app(gemini_reply: (StatusCode, Value), with_keys: bool) -> TestApp {
        test_app_with_namespace(gemini_reply, with_keys, NamespacePolicy::PerRequest).await
    }

    async fn test_app_with_namespace(
        gemini_reply: (StatusCode, Value),
        with_keys: bool,
        namespace: NamespacePolicy,
    ) -> TestApp {
        let base = spawn_upstream(gemini_reply).await;
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        let images = dir.path().join("images");
        std::fs::create_dir(&public).unwrap();
        std::fs::create_dir(&images).unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>comicgen</h1>").unwrap();
        std::fs::write(public.join("style.css"), "body {}").unwrap();
        std::fs::write(images.join("logo.png"), PNG).unwrap();

        let mut config = AppConfig::default();
        config.server.public_dir = public.clone();
        config.server.images_dir = images;
        config.server.index_file = dir.path().join("index.html");
        config.text.api_url = format!("{base}/gemini");
        config.image.api_url = format!("{base}/hf");
        config.pipeline.output_dir = public;
        config.pipeline.namespace = namespace;

        let key = |k: &str| with_keys.then(|| SecretString::from(k.to_string()));
        let state = AppState::new(config, key("gemini-key"), key("hf-key")).unwrap();
        TestApp {
            router: build_router(state),
            dir,
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn get(router: Router, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Request folders created under the output directory.
    fn request_dirs(output_dir: &Path) -> Vec<std::path::PathBuf> {
        std::fs::read_dir(output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_dir())
            .collect()
    }

    // --- /generate-mnemonic ---

    #[tokio::test]
    async fn test_mnemonic_returns_candidate_text() {
        let app = test_app(candidate("HOHO: Hydrogen Holds Oxygen"), true).await;
        let response = post_json(
            app.router.clone(),
            "/generate-mnemonic",
            json!({ "reaction": "2H2 + O2 -> 2H2O" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "mnemonic": "HOHO: Hydrogen Holds Oxygen" }));
    }

    #[tokio::test]
    async fn test_mnemonic_without_candidates_is_500_with_message() {
        let app = test_app((StatusCode::OK, json!({ "candidates": [] })), true).await;
        let response = post_json(app.router.clone(), "/generate-mnemonic", json!({ "reaction": "NaCl" })).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert_eq!(body, "Error generating mnemonic: No mnemonic generated.");
    }

    #[tokio::test]
    async fn test_mnemonic_without_key_reports_missing_credential() {
        let app = test_app(candidate("unused"), false).await;
        let response = post_json(app.router.clone(), "/generate-mnemonic", json!({ "reaction": "NaCl" })).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.starts_with("Error generating mnemonic: "));
        assert!(body.contains("GEMINI_API_KEY"));
        assert!(!body.contains("gemini-key"));
    }

    // --- /generate-comic ---

    #[tokio::test]
    async fn test_comic_saves_eligible_panels() {
        let app = test_app(candidate(&script(7)), true).await;
        let response = post_json(
            app.router.clone(),
            "/generate-comic",
            json!({ "scenario": "A cat learns to fly." }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Comic panels generated successfully!");

        let dirs = request_dirs(&app.output_dir());
        assert_eq!(dirs.len(), 1);
        let request_dir = &dirs[0];
        assert_eq!(std::fs::read(request_dir.join("panel_1.png")).unwrap(), PNG);
        assert_eq!(std::fs::read(request_dir.join("panel_2.png")).unwrap(), PNG);
        assert!(!request_dir.join("panel_3.png").exists());
    }

    #[tokio::test]
    async fn test_comic_panels_are_served_under_request_id() {
        let app = test_app(candidate(&script(7)), true).await;
        let response = post_json(
            app.router.clone(),
            "/generate-comic",
            json!({ "scenario": "A cat learns to fly." }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(body_text(response).await, "Comic panels generated successfully!");
        assert!(app.output_dir().join(&request_id).is_dir());

        let panel = get(app.router.clone(), &format!("/{request_id}/panel_1.png")).await;
        assert_eq!(panel.status(), StatusCode::OK);
        assert_eq!(body_bytes(panel).await, PNG);

        let mounted = get(app.router.clone(), &format!("/public/{request_id}/panel_2.png")).await;
        assert_eq!(mounted.status(), StatusCode::OK);
        assert_eq!(body_bytes(mounted).await, PNG);

        let skipped = get(app.router.clone(), &format!("/{request_id}/panel_3.png")).await;
        assert_eq!(skipped.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_comic_shared_namespace_serves_panels_at_root() {
        let app = test_app_with_namespace(
            candidate(&script(6)),
            true,
            NamespacePolicy::Shared,
        )
        .await;
        let response = post_json(app.router.clone(), "/generate-comic", json!({ "scenario": "x" })).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert!(request_dirs(&app.output_dir()).is_empty());

        let panel = get(app.router.clone(), "/panel_1.png").await;
        assert_eq!(panel.status(), StatusCode::OK);
        assert_eq!(body_bytes(panel).await, PNG);
    }

    #[tokio::test]
    async fn test_comic_with_few_panels_succeeds_without_images() {
        let app = test_app(candidate(&script(3)), true).await;
        let response = post_json(app.router.clone(), "/generate-comic", json!({ "scenario": "short" })).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(request_dirs(&app.output_dir()).is_empty());
    }

    #[tokio::test]
    async fn test_comic_text_failure_is_bare_500() {
        let app = test_app(
            (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })),
            true,
        )
        .await;
        let response = post_json(app.router.clone(), "/generate-comic", json!({ "scenario": "x" })).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn test_comic_missing_scenario_defaults_to_empty() {
        let app = test_app(candidate("nothing to parse"), true).await;
        let response = post_json(app.router.clone(), "/generate-comic", json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_comic_invalid_json_is_rejected() {
        let app = test_app(candidate("unused"), true).await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/generate-comic")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // --- Static files and health ---

    #[tokio::test]
    async fn test_root_serves_index() {
        let app = test_app(candidate("unused"), true).await;
        let response = get(app.router.clone(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h1>comicgen</h1>");
    }

    #[tokio::test]
    async fn test_static_files_resolve_public_then_images() {
        let app = test_app(candidate("unused"), true).await;

        let css = get(app.router.clone(), "/style.css").await;
        assert_eq!(css.status(), StatusCode::OK);
        assert_eq!(body_text(css).await, "body {}");

        let logo = get(app.router.clone(), "/logo.png").await;
        assert_eq!(logo.status(), StatusCode::OK);

        let mounted = get(app.router.clone(), "/images/logo.png").await;
        assert_eq!(mounted.status(), StatusCode::OK);

        let public = get(app.router.clone(), "/public/style.css").await;
        assert_eq!(public.status(), StatusCode::OK);

        let missing = get(app.router.clone(), "/nope.txt").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let app = test_app(candidate("unused"), true).await;
        let response = get(app.router.clone(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }
}
