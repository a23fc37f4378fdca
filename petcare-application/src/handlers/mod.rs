//! 内置事件处理器
//!
//! 每个处理器绑定一种事件，只转述事件自身携带的事实：
//! 审计类处理器向 `AuditTrail` 追加记录，通知类处理器经
//! `NotificationService` 发送提醒。具体的审计存储与通知投递
//! 由边界实现决定，处理器之间互不依赖。

mod adoptions;
mod animals;

pub use adoptions::{
    AdoptionApplicationApprovedHandler, AdoptionApplicationCreatedHandler,
    AdoptionApplicationRejectedHandler,
};
pub use animals::{
    AnimalCreatedHandler, AnimalPhotoAddedHandler, AnimalPhotoRemovedHandler,
    AnimalStatusChangedHandler, AnimalUpdatedHandler, AnimalVideoAddedHandler,
    AnimalVideoRemovedHandler,
};
