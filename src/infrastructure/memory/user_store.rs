//! In-Memory User Store Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{StoreError, UserStorePort};
use crate::domain::user::{User, UserAge, UserId, UserName};

/// 内存用户存储
///
/// 进程启动时为空，进程退出时隐式销毁，不做任何持久化
pub struct InMemoryUserStore {
    users: DashMap<UserId, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStorePort for InMemoryUserStore {
    fn list(&self) -> Vec<User> {
        self.users.iter().map(|e| e.value().clone()).collect()
    }

    fn get(&self, id: &UserId) -> Result<User, StoreError> {
        self.users
            .get(id)
            .map(|u| u.clone())
            .ok_or(StoreError::NotFound(*id))
    }

    fn create(&self, name: UserName, age: UserAge) -> User {
        // UUID v4 的碰撞概率可忽略，id 在进程生命周期内唯一
        let id = UserId::new();
        let user = User::new(id, name, age);
        self.users.insert(id, user.clone());
        tracing::info!(user_id = %id, "User created");
        user
    }

    fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        self.users
            .remove(id)
            .map(|_| {
                tracing::info!(user_id = %id, "User deleted");
            })
            .ok_or(StoreError::NotFound(*id))
    }
}
