use petcare_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("event handler failed: handler={handler}, event={event_type}: {source}")]
    EventHandler {
        handler: String,
        event_type: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("dispatch cancelled")]
    Cancelled,

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// 统一 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
