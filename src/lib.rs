//! userd - 用户记录 CRUD 服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户记录实体与校验规则
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserStore）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: UserStore 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
