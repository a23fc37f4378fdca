//! PetCare 应用层（petcare-application）
//!
//! 领域事件的分发子系统：
//! - 处理器契约（`event_handler`）：每个处理器绑定恰好一种事件类型；
//! - 处理器注册表（`registry`）：启动时显式注册，构建后只读；
//! - 分发器（`dispatcher`）：按输入顺序逐事件、按注册顺序逐处理器顺序投递，
//!   失败即中止（fail-fast）并向调用方传播；
//! - 边界抽象（`audit`、`notification`）：审计与通知以普通处理器身份接入，
//!   默认实现仅记录日志或为空操作；
//! - 内置处理器（`handlers`）：动物与领养申请事件的审计/通知处理器。
//!
//! 分发发生在业务操作的数据变更提交之后：处理器失败不回滚业务操作，
//! 只使分发调用失败，由调用方决定记录并继续还是向上游报错。
//!
pub mod audit;
pub mod dispatcher;
pub mod error;
pub mod event_handler;
pub mod handlers;
pub mod notification;
pub mod registry;

pub use dispatcher::{DomainEventDispatcher, RegistryDispatcher};
pub use event_handler::DomainEventHandler;
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};
