//! 审计边界（AuditTrail）
//!
//! 审计记录以普通处理器的身份从事件派生；记录落到哪里（文件、控制台、
//! 远端存储）由实现决定。默认实现 `TracingAuditTrail` 仅输出结构化日志。
//!
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use petcare_domain::domain_event::DomainEvent;
use petcare_domain::status::AuditOperation;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// 一条审计记录：来自某个领域事件的既有事实
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub operation: AuditOperation,
    pub aggregate_type: &'static str,
    pub aggregate_id: Uuid,
    pub aggregate_version: usize,
    pub event_type: &'static str,
    pub occurred_at: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl AuditEntry {
    /// 从事件的公共元信息与给定载荷构造审计记录
    ///
    /// `aggregate_type` 传聚合根的 `AggregateRoot::TYPE`，处理器静态知道
    /// 自己服务的聚合类型。
    pub fn from_event(
        operation: AuditOperation,
        aggregate_type: &'static str,
        event: &dyn DomainEvent,
        details: serde_json::Value,
    ) -> Self {
        Self {
            operation,
            aggregate_type,
            aggregate_id: event.aggregate_id(),
            aggregate_version: event.aggregate_version(),
            event_type: event.event_type(),
            occurred_at: event.occurred_at(),
            details,
        }
    }
}

/// 审计落地接口：生产实现自行负责存储与重试语义
#[async_trait]
pub trait AuditTrail: Send + Sync {
    async fn append(&self, entry: AuditEntry, cancel: &CancellationToken) -> anyhow::Result<()>;
}

/// 默认审计实现：以结构化日志输出审计记录
pub struct TracingAuditTrail;

#[async_trait]
impl AuditTrail for TracingAuditTrail {
    async fn append(&self, entry: AuditEntry, _cancel: &CancellationToken) -> anyhow::Result<()> {
        tracing::info!(
            operation = %entry.operation,
            aggregate_type = entry.aggregate_type,
            aggregate_id = %entry.aggregate_id,
            aggregate_version = entry.aggregate_version,
            event_type = entry.event_type,
            occurred_at = %entry.occurred_at,
            details = %entry.details,
            "audit entry"
        );
        Ok(())
    }
}
