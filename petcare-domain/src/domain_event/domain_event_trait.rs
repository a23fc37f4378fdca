use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use uuid::Uuid;

/// 领域事件需要满足的通用能力边界
///
/// 事件一经构造即不可变；具体事件以值相等（`PartialEq`）参与测试断言。
/// trait 本身保持对象安全，分发器以 `Box<dyn DomainEvent>` 承载异构事件序列，
/// 处理器通过 `as_any` 向下转型到具体事件类型。
pub trait DomainEvent: Any + fmt::Debug + Send + Sync {
    /// 事件唯一标识
    fn event_id(&self) -> Uuid;

    /// 事件类型（形如 `AnimalEvent.Created`）
    fn event_type(&self) -> &'static str;

    /// 产生该事件的聚合标识
    fn aggregate_id(&self) -> Uuid;

    /// 事件对应的聚合版本（用于并发控制与审计排序）
    fn aggregate_version(&self) -> usize;

    /// 事件发生时间
    fn occurred_at(&self) -> DateTime<Utc>;

    /// 以 `Any` 暴露自身，供处理器按具体类型向下转型
    fn as_any(&self) -> &dyn Any;
}
