//! Invoke and query handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::ledger::FunctionRequest;
use crate::{error::ApiError, AppState};

/// Runs a state-changing function
pub async fn invoke(
    State(state): State<AppState>,
    Path(function): Path<String>,
    Json(request): Json<FunctionRequest>,
) -> Result<StatusCode, ApiError> {
    state.dispatcher.invoke(&function, &request.args).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Runs a query function and returns the stored bytes as-is
pub async fn query(
    State(state): State<AppState>,
    Path(function): Path<String>,
    Json(request): Json<FunctionRequest>,
) -> Result<Response, ApiError> {
    let bytes = state.dispatcher.query(&function, &request.args).await?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes).into_response())
}
