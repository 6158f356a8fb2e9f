//! User HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::user::{UserAge, UserId, UserName};
use crate::infrastructure::http::dto::{CreateUserRequest, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析路径参数中的用户 id
///
/// 无法解析的 id 不可能由本服务签发过，等同于记录不存在（404）
fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse().map_err(|_| ApiError::user_not_found(raw))
}

/// 获取用户列表
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserResponse>> {
    let users = state.store.list();

    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Json(responses)
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&id)?;

    let user = state.store.get(&user_id)?;

    Ok(Json(user.into()))
}

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let name = UserName::new(req.name.unwrap_or_default())?;
    let age = UserAge::new(req.age.unwrap_or(0))?;

    let user = state.store.create(name, age);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user_id = parse_user_id(&id)?;

    state.store.delete(&user_id)?;

    Ok(StatusCode::ACCEPTED)
}
