use axum::{
    Json,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
};

use super::{AppState, CurrentUser};
use crate::error::AppError;

/// POST /recipes/{id}/shopping_cart
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state.shopping_command.add(user_id, id).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// DELETE /recipes/{id}/shopping_cart
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.shopping_command.remove(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /recipes/download_shopping_cart
pub async fn download(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    state.shopping_query.ensure_queued(&user_id).await?;

    let report = state
        .shopping_query
        .report(&user_id, state.merge_policy)
        .await?;

    tracing::info!(user_id, entries = report.len(), "Shopping list downloaded");

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=shopping_list.txt",
            ),
        ],
        report.render(),
    ))
}
