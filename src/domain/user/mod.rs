//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户记录实体
//! - 创建输入的校验规则

mod entities;
mod errors;
mod value_objects;

pub use entities::User;
pub use errors::UserError;
pub use value_objects::{UserAge, UserId, UserName};
