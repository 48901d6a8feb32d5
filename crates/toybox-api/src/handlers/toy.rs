//! Toy catalog handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use toybox_entity::toy::{Label, Message, Toy};
use toybox_service::ToyPage;
use toybox_service::ToyStats;
use toybox_service::toy::LabelCount;

use crate::dto::request::{AddMessageRequest, AddToyRequest, UpdateToyRequest};
use crate::dto::response::{MessageRemovedResponse, RemovedResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, ToyQueryParams, ValidJson};
use crate::state::AppState;

/// GET /api/toy
pub async fn query_toys(
    State(state): State<AppState>,
    Query(params): Query<ToyQueryParams>,
) -> Result<Json<ToyPage>, ApiError> {
    let (filter, page_idx) = params.into_filter()?;
    let page = state.toy_service.query(&filter, page_idx).await?;
    Ok(Json(page))
}

/// GET /api/toy/{toy_id}
pub async fn get_toy(
    State(state): State<AppState>,
    Path(toy_id): Path<Uuid>,
) -> Result<Json<Toy>, ApiError> {
    let toy = state.toy_service.get_by_id(toy_id).await?;
    Ok(Json(toy))
}

/// GET /api/toy/labels
pub async fn get_labels(State(state): State<AppState>) -> Json<Vec<Label>> {
    Json(state.toy_service.get_labels())
}

/// GET /api/toy/labels/count
pub async fn get_labels_count(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<Label, LabelCount>>, ApiError> {
    let counts = state.toy_service.get_labels_count().await?;
    Ok(Json(counts))
}

/// GET /api/toy/dashboard
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<ToyStats>, ApiError> {
    let stats = state.toy_service.get_stats().await?;
    Ok(Json(stats))
}

/// POST /api/toy
pub async fn add_toy(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<AddToyRequest>,
) -> Result<Json<Toy>, ApiError> {
    let toy = state
        .toy_service
        .add_toy(req.into(), Some(auth.as_mini()))
        .await?;
    Ok(Json(toy))
}

/// PUT /api/toy/{toy_id}
pub async fn update_toy(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(toy_id): Path<Uuid>,
    ValidJson(req): ValidJson<UpdateToyRequest>,
) -> Result<Json<Toy>, ApiError> {
    let toy = state.toy_service.update_toy(req.into_patch(toy_id)).await?;
    Ok(Json(toy))
}

/// DELETE /api/toy/{toy_id}
pub async fn remove_toy(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(toy_id): Path<Uuid>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let deleted = state.toy_service.remove_toy(toy_id).await?;
    Ok(Json(RemovedResponse { deleted }))
}

/// POST /api/toy/{toy_id}/msg
pub async fn add_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(toy_id): Path<Uuid>,
    ValidJson(req): ValidJson<AddMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .toy_service
        .add_message(toy_id, &req.text, auth.as_mini())
        .await?;
    Ok(Json(message))
}

/// DELETE /api/toy/{toy_id}/msg/{msg_id}
pub async fn remove_message(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((toy_id, msg_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageRemovedResponse>, ApiError> {
    let message_id = state.toy_service.remove_message(toy_id, msg_id).await?;
    Ok(Json(MessageRemovedResponse { message_id }))
}
