//! User Store Port - 用户记录存储
//!
//! 定义用户记录生命周期的抽象接口，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::user::{User, UserAge, UserId, UserName};

/// User Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(UserId),
}

/// User Store Port
///
/// 管理用户记录的生命周期，所有状态存储在内存中。
/// 每个操作都是单次原子 map 访问，无锁、无内部挂起点。
pub trait UserStorePort: Send + Sync {
    /// 获取所有用户记录（快照，顺序不作保证）
    fn list(&self) -> Vec<User>;

    /// 按 id 获取用户记录
    fn get(&self, id: &UserId) -> Result<User, StoreError>;

    /// 创建用户记录
    ///
    /// 输入的有效性由值对象类型保证；id 由存储生成并返回
    fn create(&self, name: UserName, age: UserAge) -> User;

    /// 按 id 删除用户记录
    fn delete(&self, id: &UserId) -> Result<(), StoreError>;
}
