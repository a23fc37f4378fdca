//! 领域层统一错误定义
//!
//! 聚焦值对象校验、命令与状态校验的最小必要集合，
//! 便于在应用层统一转换与处理。
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
