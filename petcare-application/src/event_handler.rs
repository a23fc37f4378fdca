//! 事件处理器（DomainEventHandler）
//!
//! 定义消费某一种具体事件类型的处理逻辑与元信息（名称）。
//!
use async_trait::async_trait;
use petcare_domain::domain_event::DomainEvent;
use tokio_util::sync::CancellationToken;

/// 事件处理器：处理恰好一种事件类型
///
/// - 类型参数 `E` 即该处理器绑定的事件类型，绑定零个或多个类型在编译期不可表达；
/// - 处理器不得假设其他处理器的存在、相对顺序或被分发器重试；
/// - 执行 I/O 的处理器自行负责失败与重试语义，未处理的失败按 fail-fast
///   传播给分发调用方；
/// - 取消信号是协作式的：处理器应在自身的 I/O 边界观察 `cancel`，
///   分发器不会强行中断正在执行的处理器。
#[async_trait]
pub trait DomainEventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于失败标记与审计）
    fn name(&self) -> &str;

    /// 处理事件
    async fn handle(&self, event: &E, cancel: &CancellationToken) -> anyhow::Result<()>;
}
