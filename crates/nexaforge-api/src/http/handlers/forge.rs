//! Forge endpoint.
//!
//! POST /api/v1/forge (and the legacy POST /api/forge) - validate the request,
//! run the pipeline, return the blueprint.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use nexaforge_core::pipeline::orchestrator::run_forge_pipeline;
use nexaforge_core::validation::validate_request;
use nexaforge_types::forge::{ForgeRequest, ForgeResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/v1/forge - Generate a blueprint.
///
/// Validation runs before any agent. The pipeline itself cannot fail; it
/// returns once persistence and provisioning have settled.
pub async fn forge_blueprint(
    State(state): State<AppState>,
    payload: Result<Json<ForgeRequest>, JsonRejection>,
) -> Result<Json<ForgeResponse>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let Json(request) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;
    validate_request(&request)?;

    let response = run_forge_pipeline(&state.pipeline, &request).await;

    tracing::info!(
        %request_id,
        slug = %response.project_slug,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "blueprint generated"
    );

    Ok(Json(response))
}
