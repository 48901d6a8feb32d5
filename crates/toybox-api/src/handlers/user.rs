//! User directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use toybox_entity::user::User;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, ValidJson};
use crate::state::AppState;

/// GET /api/user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(user))
}

/// PUT /api/user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.update(&auth, req.into_update(id)).await?;
    Ok(Json(user))
}

/// DELETE /api/user/{id}
pub async fn remove_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.remove(&admin, id).await?;
    Ok(Json(MessageResponse::new("User removed")))
}
