//! Axum router configuration with middleware.
//!
//! Versioned routes live under `/api/v1/`. The forge endpoint is also
//! mounted at `/api/forge`, the path the web form posts to.
//! Middleware: panic recovery, CORS, tracing.

use std::any::Any as PanicPayload;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/forge", post(handlers::forge::forge_blueprint))
        .route("/projects/{slug}", get(handlers::project::get_project));

    let routes = Router::new()
        .nest("/api/v1", api_routes)
        .route("/api/forge", post(handlers::forge::forge_blueprint))
        .route("/health", get(health_check));

    with_middleware(routes).with_state(state)
}

fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// A panicking handler still answers with the generic error body.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(detail).into_response()
}

/// Health check endpoint (no auth required).
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use nexaforge_core::agent::caller::ModelCaller;
    use nexaforge_core::pipeline::orchestrator::ForgePipeline;
    use nexaforge_infra::config::database_url;
    use nexaforge_infra::sqlite::blueprint::SqliteBlueprintStore;
    use nexaforge_infra::sqlite::pool::DatabasePool;
    use nexaforge_infra::storage::BlueprintStoreBackend;

    use super::*;

    async fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::new(&database_url(dir.path())).await.unwrap();
        let store = BlueprintStoreBackend::Sqlite(SqliteBlueprintStore::new(pool));
        let pipeline = ForgePipeline::new(ModelCaller::disabled())
            .with_store(Some(Arc::new(store)))
            .with_stage_pause(Duration::ZERO);
        (AppState::from_pipeline(pipeline, dir.path().to_path_buf()), dir)
    }

    fn aurora_body() -> serde_json::Value {
        serde_json::json!({
            "projectName": "Aurora",
            "brandVoice": "calm and precise",
            "targetAudience": "freelance designers",
            "primaryGoal": "book consultations",
            "industry": "AI & Machine Learning",
            "theme": "Glassmorphism",
            "tone": "Bold",
            "features": [],
            "integrations": {
                "stripe": true,
                "booking": false,
                "contactForm": true,
                "blog": false
            }
        })
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _dir) = test_state().await;
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, json) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_forge_without_model_returns_fallback_blueprint() {
        let (state, _dir) = test_state().await;
        let (status, json) =
            send(&state, post_json("/api/v1/forge", aurora_body().to_string())).await;

        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = json["architect"]["sitemap"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Home", "Solutions", "AI Studio", "Resources", "Launch"]);
        assert!(json["integration"].get("bookingConfiguration").is_none());
        assert!(!json["integration"]["stripeProducts"].as_array().unwrap().is_empty());
        assert!(json["projectSlug"].as_str().unwrap().starts_with("aurora-"));
    }

    #[tokio::test]
    async fn test_forge_persists_blueprint_for_lookup() {
        let (state, _dir) = test_state().await;
        let (_, created) =
            send(&state, post_json("/api/forge", aurora_body().to_string())).await;
        let slug = created["projectSlug"].as_str().unwrap();

        let request = Request::get(format!("/api/v1/projects/{slug}"))
            .body(Body::empty())
            .unwrap();
        let (status, fetched) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_forge_rejects_unknown_industry_with_generic_error() {
        let (state, _dir) = test_state().await;
        let mut body = aurora_body();
        body["industry"] = "Quantum Bakery".into();

        let (status, json) = send(&state, post_json("/api/v1/forge", body.to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Unable to generate blueprint" }));
    }

    #[tokio::test]
    async fn test_forge_rejects_bad_tone_and_malformed_json() {
        let (state, _dir) = test_state().await;
        let mut body = aurora_body();
        body["tone"] = "Sarcastic".into();

        let (status, json) = send(&state, post_json("/api/v1/forge", body.to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Unable to generate blueprint");

        let (status, json) =
            send(&state, post_json("/api/v1/forge", "{not json".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Unable to generate blueprint");
    }

    #[tokio::test]
    async fn test_unknown_project_is_404() {
        let (state, _dir) = test_state().await;
        let request = Request::get("/api/v1/projects/nope-123")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&state, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Project not found");
    }

    #[tokio::test]
    async fn test_handler_panic_returns_generic_error() {
        let (state, _dir) = test_state().await;
        let router = with_middleware(Router::new().route(
            "/boom",
            get(|| async {
                panic!("stage exploded");
                #[allow(unreachable_code)]
                ()
            }),
        ))
        .with_state(state);

        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Unable to generate blueprint" }));
    }
}
