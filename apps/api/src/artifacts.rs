//! Saved artifacts — the "My Content" store.
//!
//! Artifacts are stored and retrieved verbatim; every query is scoped to
//! the owning user.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::require_nonempty;
use crate::models::artifact::ArtifactRow;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveArtifactRequest {
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub content: Value,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

pub async fn save_artifact(
    pool: &PgPool,
    request: &SaveArtifactRequest,
) -> Result<ArtifactRow, AppError> {
    require_nonempty("kind", &request.kind)?;
    require_nonempty("title", &request.title)?;

    let row: ArtifactRow = sqlx::query_as(
        r#"
        INSERT INTO artifacts (id, user_id, kind, title, content, created_at)
        VALUES ($1, $2, $3, $4, $5, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(request.kind.trim())
    .bind(request.title.trim())
    .bind(&request.content)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_artifacts(pool: &PgPool, user_id: Uuid) -> Result<Vec<ArtifactRow>, AppError> {
    let rows: Vec<ArtifactRow> = sqlx::query_as(
        "SELECT * FROM artifacts WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_artifact(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<ArtifactRow, AppError> {
    let row: Option<ArtifactRow> =
        sqlx::query_as("SELECT * FROM artifacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Artifact {id} not found")))
}

pub async fn delete_artifact(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM artifacts WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Artifact {id} not found")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/artifacts
pub async fn handle_save_artifact(
    State(state): State<AppState>,
    Json(request): Json<SaveArtifactRequest>,
) -> Result<Json<ArtifactRow>, AppError> {
    let row = save_artifact(&state.db, &request).await?;
    Ok(Json(row))
}

/// GET /api/v1/artifacts
pub async fn handle_list_artifacts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ArtifactRow>>, AppError> {
    let rows = list_artifacts(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/artifacts/:id
pub async fn handle_get_artifact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ArtifactRow>, AppError> {
    let row = get_artifact(&state.db, params.user_id, id).await?;
    Ok(Json(row))
}

/// DELETE /api/v1/artifacts/:id
pub async fn handle_delete_artifact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    delete_artifact(&state.db, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
