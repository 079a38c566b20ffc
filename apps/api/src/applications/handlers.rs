use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::applications::store;
use crate::applications::tracking::{
    apply_update, new_application, CreateApplicationRequest, UpdateApplicationRequest,
};
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

/// POST /api/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let row = new_application(req, Utc::now());
    let saved = store::insert(&state.db, &row).await?;
    info!("Tracked application {} for user {}", saved.id, saved.user_id);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/applications/:user_id
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = store::list_for_user(&state.db, &user_id).await?;
    Ok(Json(rows))
}

/// PUT /api/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let mut row = store::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    apply_update(&mut row, &req, Utc::now());
    let saved = store::save(&state.db, &row).await?;
    Ok(Json(saved))
}

/// DELETE /api/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !store::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }
    info!("Deleted application {id}");
    Ok(Json(json!({ "message": "Application deleted successfully" })))
}
