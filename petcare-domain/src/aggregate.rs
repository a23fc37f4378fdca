//! 聚合根（AggregateRoot）抽象
//!
//! 约束一个聚合的核心行为：
//! - 每个有业务含义的状态变更方法先校验前置条件，再修改内部状态，
//!   最后向私有缓冲追加对应的领域事件；
//! - 不提供绕过事件记录的公开字段修改器；
//! - `take_events` 在工作单元提交后由持久化方调用，恰好一次。
//!
use crate::domain_event::DomainEvent;
use crate::entity::Entity;

/// 聚合根接口：领域事件的唯一生产者
pub trait AggregateRoot: Entity {
    /// 聚合类型名（用于审计与日志）
    const TYPE: &'static str;

    /// 取走全部未提交事件并清空缓冲
    ///
    /// 返回的序列保持产生顺序；缓冲为空时返回空序列而非错误。
    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>>;
}
