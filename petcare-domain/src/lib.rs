//! PetCare 领域层基础库（petcare-domain）
//!
//! 提供宠物领养平台的领域建模构件：
//! - 实体（`entity`）与聚合根（`aggregate`）：状态变更方法在修改状态的同时
//!   向私有缓冲区追加领域事件；
//! - 领域事件（`domain_event`）：不可变的事件契约、事件元信息与未提交事件缓冲；
//! - 具体事件（`events`）：动物、领养申请等聚合的事件定义；
//! - 聚合实现（`aggregates`）：`Animal`、`AdoptionApplication`；
//! - 值对象（`value_object`）与状态枚举（`status`）。
//!
//! 本 crate 不涉及存储与传输：事件如何被分发由应用层（petcare-application）
//! 的注册表与分发器负责，事件的持久化与通知发送属于被排除的基础设施协作方。
//!
//! 典型用法：
//! 1. 通过聚合的业务方法（如 `Animal::change_status`）变更状态并产生事件；
//! 2. 工作单元提交后调用 `take_events` 一次性取走未提交事件；
//! 3. 将事件序列交给应用层分发器投递到各处理器。
//!
pub mod aggregate;
pub mod aggregates;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod events;
pub mod status;
pub mod value_object;
