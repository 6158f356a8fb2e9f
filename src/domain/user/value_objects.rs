//! User Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserError;

/// 用户唯一标识
///
/// 创建时由存储层生成，进程生命周期内全局唯一，之后不可变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// 用户名
///
/// 不变量: 非空字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Result<Self, UserError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 年龄
///
/// 不变量: 正整数（0 被显式拒绝，见 DESIGN.md 的决策记录）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAge(u32);

impl UserAge {
    pub fn new(age: u32) -> Result<Self, UserError> {
        if age == 0 {
            return Err(UserError::InvalidAge);
        }
        Ok(Self(age))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
