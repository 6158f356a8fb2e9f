//! Application State

use std::sync::Arc;

use crate::application::ports::UserStorePort;

/// 应用状态
///
/// 持有 UserStore 端口，通过依赖注入传入 handler，
/// 测试可注入独立的存储实例
pub struct AppState {
    pub store: Arc<dyn UserStorePort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn UserStorePort>) -> Self {
        Self { store }
    }
}
