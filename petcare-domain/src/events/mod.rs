//! 具体领域事件定义
//!
//! 每个事件是一个独立结构体：公共元信息（`EventMeta`）加上该变更相关的载荷。
//! 事件类型字符串采用 `<聚合>Event.<变更>` 约定，如 `AnimalEvent.Created`。

mod adoption;
mod animal;

pub use adoption::{
    AdoptionApplicationApproved, AdoptionApplicationCreated, AdoptionApplicationRejected,
};
pub use animal::{
    AnimalCreated, AnimalPhotoAdded, AnimalPhotoRemoved, AnimalStatusChanged, AnimalUpdated,
    AnimalVideoAdded, AnimalVideoRemoved,
};

/// 为携带 `meta: EventMeta` 字段的结构体实现 `DomainEvent`
macro_rules! domain_event {
    ($event:ty, $event_type:literal) => {
        impl $crate::domain_event::DomainEvent for $event {
            fn event_id(&self) -> ::uuid::Uuid {
                self.meta.event_id()
            }

            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> ::uuid::Uuid {
                self.meta.aggregate_id()
            }

            fn aggregate_version(&self) -> usize {
                self.meta.aggregate_version()
            }

            fn occurred_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.meta.occurred_at()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

pub(crate) use domain_event;
