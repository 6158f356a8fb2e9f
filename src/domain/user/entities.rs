//! User Context - Entities

use super::{UserAge, UserId, UserName};

/// 用户记录
///
/// 生命周期: 仅通过 create 操作创建（由存储层分配 id），
/// 不支持更新，仅可按 id 显式删除
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub age: UserAge,
}

impl User {
    pub fn new(id: UserId, name: UserName, age: UserAge) -> Self {
        Self { id, name, age }
    }
}
