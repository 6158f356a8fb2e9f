//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("用户名不能为空")]
    EmptyName,

    #[error("年龄必须为正整数")]
    InvalidAge,
}
