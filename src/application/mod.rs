//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UserStore）

pub mod ports;

pub use ports::{StoreError, UserStorePort};
