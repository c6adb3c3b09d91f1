//! Stored blueprint lookup.
//!
//! GET /api/v1/projects/{slug}

use axum::Json;
use axum::extract::{Path, State};

use nexaforge_core::repository::blueprint::BlueprintStore;
use nexaforge_types::forge::ForgeResponse;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/v1/projects/{slug} - Fetch a previously generated blueprint.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ForgeResponse>, AppError> {
    let store = state.pipeline.store().ok_or(AppError::StorageDisabled)?;
    let response = store.get(&slug).await?.ok_or(AppError::ProjectNotFound)?;
    Ok(Json(response))
}
