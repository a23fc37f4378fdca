use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 事件公共元信息
///
/// 在事件构造时一次性生成：事件 ID 取新的 v4 UUID，发生时间取当前 UTC 时刻。
/// 构造之后不再变更。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMeta {
    event_id: Uuid,
    aggregate_id: Uuid,
    aggregate_version: usize,
    occurred_at: DateTime<Utc>,
}

impl EventMeta {
    /// 为指定聚合的一次状态变更生成元信息
    pub fn record(aggregate_id: Uuid, aggregate_version: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            aggregate_id,
            aggregate_version,
            occurred_at: Utc::now(),
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn aggregate_id(&self) -> Uuid {
        self.aggregate_id
    }

    pub fn aggregate_version(&self) -> usize {
        self.aggregate_version
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
