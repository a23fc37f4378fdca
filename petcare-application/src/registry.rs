//! 处理器注册表（HandlerRegistry）
//!
//! 启动时通过显式的组合步骤注册全部处理器（无运行时类型扫描），
//! 构建从事件类型到处理器有序列表的映射：
//! - 同一事件类型内保持注册顺序，保证分发的确定性；
//! - 重复注册同一（事件类型，处理器类型）对是幂等的，折叠为一条；
//! - `build` 之后注册表只读，读取无锁。
//!
use std::any::TypeId;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use petcare_domain::domain_event::DomainEvent;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, AppResult};
use crate::event_handler::DomainEventHandler;

type HandlerFuture<'a> = Pin<Box<dyn Future<Output = AppResult<()>> + Send + 'a>>;

type HandlerFn = Arc<
    dyn for<'a> Fn(&'a dyn DomainEvent, &'a CancellationToken) -> HandlerFuture<'a> + Send + Sync,
>;

/// 一条注册记录：（事件类型，处理器）配对与类型擦除后的调用闭包
pub(crate) struct Registration {
    handler_id: TypeId,
    name: String,
    invoke: HandlerFn,
}

impl Registration {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) async fn invoke(
        &self,
        event: &dyn DomainEvent,
        cancel: &CancellationToken,
    ) -> AppResult<()> {
        (self.invoke)(event, cancel).await
    }
}

/// 只读的处理器注册表，进程生命周期内持有处理器实例
pub struct HandlerRegistry {
    by_event: HashMap<TypeId, Vec<Registration>>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// 按事件的具体类型返回有序处理器列表；无注册时返回空列表（合法的空操作）
    pub(crate) fn handlers_for(&self, event_type_id: TypeId) -> &[Registration] {
        self.by_event
            .get(&event_type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 注册的处理器总数（用于启动日志与测试）
    pub fn handler_count(&self) -> usize {
        self.by_event.values().map(Vec::len).sum()
    }
}

/// 注册表构建器：链式注册，`build` 后冻结
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    by_event: HashMap<TypeId, Vec<Registration>>,
}

impl HandlerRegistryBuilder {
    /// 注册处理器 `H` 处理事件类型 `E`
    ///
    /// 注册表通过 `Arc` 持有处理器实例直至进程结束（长生命周期实例；
    /// 内置处理器不携带每次调用的状态，无需按次构造的工厂）。
    /// 同一（`E`，`H`）对的重复注册被幂等地忽略。
    pub fn register<E, H>(mut self, handler: Arc<H>) -> Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + 'static,
    {
        let entries = self.by_event.entry(TypeId::of::<E>()).or_default();
        if entries.iter().any(|r| r.handler_id == TypeId::of::<H>()) {
            return self;
        }

        let name = handler.name().to_string();
        let invoke: HandlerFn = {
            let name = name.clone();

            Arc::new(move |event, cancel| {
                let handler = handler.clone();
                let name = name.clone();

                Box::pin(async move {
                    // 键与闭包使用同一泛型 E，正常情况下 downcast 永远不会失败
                    let Some(typed) = event.as_any().downcast_ref::<E>() else {
                        return Err(AppError::TypeMismatch {
                            expected: std::any::type_name::<E>(),
                            found: event.event_type(),
                        });
                    };
                    handler
                        .handle(typed, cancel)
                        .await
                        .map_err(|source| AppError::EventHandler {
                            handler: name,
                            event_type: event.event_type(),
                            source,
                        })
                })
            })
        };

        entries.push(Registration {
            handler_id: TypeId::of::<H>(),
            name,
            invoke,
        });
        self
    }

    /// 冻结注册表；此后不再有任何注册入口
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            by_event: self.by_event,
        }
    }
}
