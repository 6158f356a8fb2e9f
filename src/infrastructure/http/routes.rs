//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/v1/users       GET     获取用户列表
//! - /api/v1/users       POST    创建用户
//! - /api/v1/users/:id   GET     获取用户详情
//! - /api/v1/users/:id   DELETE  删除用户
//! - /api/v1/ping        GET     健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api/v1", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/users", user_routes())
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
}
