//! 领域事件（Domain Event）与未提交事件缓冲
//!
//! 定义事件需要实现的最小接口（`DomainEvent`）、事件公共元信息（`EventMeta`）、
//! 聚合内部的未提交事件缓冲（`PendingEvents`）与字段变更封装（`FieldChanged`）。

mod domain_event_trait;
mod event_meta;
mod field_changed;
mod pending_events;

pub use domain_event_trait::DomainEvent;
pub use event_meta::EventMeta;
pub use field_changed::FieldChanged;
pub use pending_events::PendingEvents;
