//! 领域层统一错误定义
//!
//! 聚焦事件发布/分发、仓储与值校验等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 事件系统 ---
    #[error("event publish failed: type={event_type}, reason={reason}")]
    EventPublish { event_type: String, reason: String },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("dispatch cancelled: undelivered={undelivered}")]
    DispatchCancelled { undelivered: usize },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("already exists: {reason}")]
    AlreadyExists { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },

    // --- 领域规则 ---
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

impl DomainError {
    pub fn event_publish(event_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EventPublish {
            event_type: event_type.into(),
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
