//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

// ============================================================================
// User DTOs
// ============================================================================

/// 创建用户请求
///
/// 字段为 Option：缺失字段进入校验逻辑统一处理（400），
/// 而不是在反序列化阶段被提取器拒绝
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            age: user.age.value(),
        }
    }
}
