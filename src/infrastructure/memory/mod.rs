//! Memory Layer - In-Memory State Management
//!
//! 实现 UserStore，管理用户记录的内存状态

mod user_store;

pub use user_store::InMemoryUserStore;
