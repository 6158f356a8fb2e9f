//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::StoreError;
use crate::domain::user::UserError;

/// 错误响应体（仅 404 携带）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404，响应体为 `{"error": "..."}`
    NotFound(String),
    /// 400，空响应体
    InvalidInput(String),
}

impl ApiError {
    /// 指定 id 的用户不存在
    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("User with id {} not found", id))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse { error: msg }),
                )
                    .into_response()
            }
            ApiError::InvalidInput(msg) => {
                tracing::warn!(error = %msg, "Invalid input");
                StatusCode::BAD_REQUEST.into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::user_not_found(id),
        }
    }
}
