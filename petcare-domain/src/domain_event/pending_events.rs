use super::DomainEvent;

/// 聚合内部的未提交事件缓冲，按产生顺序排列
///
/// 仅允许追加与一次性取走：
/// - `record` 只应由聚合自身的状态变更方法调用（缓冲字段保持私有）；
/// - `take` 返回有序事件序列并清空缓冲，空缓冲返回空序列而非错误；
/// - 每个工作单元由持久化方恰好取走一次，分发器不接触缓冲。
///
/// 聚合在一个工作单元内为单写者，缓冲不做内部加锁。
#[derive(Debug, Default)]
pub struct PendingEvents {
    events: Vec<Box<dyn DomainEvent>>,
}

impl PendingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个事件到缓冲末尾
    pub fn record(&mut self, event: Box<dyn DomainEvent>) {
        self.events.push(event);
    }

    /// 取走全部未提交事件并清空缓冲
    pub fn take(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.events)
    }

    /// 获取事件数量
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 判断是否为空
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
