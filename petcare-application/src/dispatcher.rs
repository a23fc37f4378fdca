//! 事件分发器（DomainEventDispatcher）
//!
//! 将一次工作单元产生的事件序列投递给各自的注册处理器：
//! - 事件间按输入顺序、处理器间按注册顺序，严格顺序逐个 await；
//! - 任一处理器失败立即中止本批次剩余投递并向调用方传播（fail-fast）；
//! - 空序列与无处理器的事件均为合法空操作；
//! - 取消信号在两次处理器调用之间被观察，不强行中断正在执行的处理器。
//!
//! 分发器不持有跨处理器调用的锁；注册表构建后只读。多个并发的
//! `dispatch` 调用相互独立，处理器自身的并发安全由处理器作者保证。
//!
use async_trait::async_trait;
use petcare_domain::domain_event::DomainEvent;
use std::any::Any;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, AppResult};
use crate::registry::HandlerRegistry;

/// 事件分发接口
///
/// 调用方（工作单元/持久化组件）在提交后取走各聚合的未提交事件，
/// 将保持顺序的合并序列交给 `dispatch`。分发发生在数据变更提交之后：
/// 处理器失败不回滚业务操作，仅使分发调用失败。
#[async_trait]
pub trait DomainEventDispatcher: Send + Sync {
    /// 按顺序分发一批事件；完成或在首个失败处返回错误
    async fn dispatch(
        &self,
        events: Vec<Box<dyn DomainEvent>>,
        cancel: &CancellationToken,
    ) -> AppResult<()>;
}

/// 基于注册表的默认分发器实现
pub struct RegistryDispatcher {
    registry: Arc<HandlerRegistry>,
}

impl RegistryDispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl DomainEventDispatcher for RegistryDispatcher {
    async fn dispatch(
        &self,
        events: Vec<Box<dyn DomainEvent>>,
        cancel: &CancellationToken,
    ) -> AppResult<()> {
        for event in &events {
            let handlers = self.registry.handlers_for(event.as_any().type_id());
            tracing::debug!(
                event_type = event.event_type(),
                event_id = %event.event_id(),
                handlers = handlers.len(),
                "dispatching domain event"
            );

            for registration in handlers {
                if cancel.is_cancelled() {
                    return Err(AppError::Cancelled);
                }
                if let Err(err) = registration.invoke(event.as_ref(), cancel).await {
                    tracing::warn!(
                        handler = registration.name(),
                        event_type = event.event_type(),
                        "event handler failed, aborting batch"
                    );
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_handler::DomainEventHandler;
    use anyhow::bail;
    use petcare_domain::domain_event::{EventMeta, FieldChanged};
    use petcare_domain::events::{AnimalCreated, AnimalStatusChanged, AnimalUpdated};
    use petcare_domain::status::AnimalStatus;
    use petcare_domain::value_object::{Name, Slug};
    use std::sync::Mutex;
    use uuid::Uuid;

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct AuditSpy {
        log: CallLog,
    }

    #[async_trait]
    impl DomainEventHandler<AnimalCreated> for AuditSpy {
        fn name(&self) -> &str {
            "AuditSpy"
        }
        async fn handle(
            &self,
            event: &AnimalCreated,
            _cancel: &CancellationToken,
        ) -> anyhow::Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("AuditSpy:{}", event.event_type()));
            Ok(())
        }
    }

    struct NotifySpy {
        log: CallLog,
    }

    #[async_trait]
    impl DomainEventHandler<AnimalCreated> for NotifySpy {
        fn name(&self) -> &str {
            "NotifySpy"
        }
        async fn handle(
            &self,
            event: &AnimalCreated,
            _cancel: &CancellationToken,
        ) -> anyhow::Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("NotifySpy:{}", event.event_type()));
            Ok(())
        }
    }

    struct StatusSpy {
        log: CallLog,
    }

    #[async_trait]
    impl DomainEventHandler<AnimalStatusChanged> for StatusSpy {
        fn name(&self) -> &str {
            "StatusSpy"
        }
        async fn handle(
            &self,
            event: &AnimalStatusChanged,
            _cancel: &CancellationToken,
        ) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(format!(
                "StatusSpy:{}->{}",
                event.status.old, event.status.new
            ));
            Ok(())
        }
    }

    struct FailingSpy {
        log: CallLog,
    }

    #[async_trait]
    impl DomainEventHandler<AnimalCreated> for FailingSpy {
        fn name(&self) -> &str {
            "FailingSpy"
        }
        async fn handle(
            &self,
            _event: &AnimalCreated,
            _cancel: &CancellationToken,
        ) -> anyhow::Result<()> {
            self.log.lock().unwrap().push("FailingSpy".into());
            bail!("notification endpoint unreachable")
        }
    }

    struct CancellingSpy {
        log: CallLog,
    }

    #[async_trait]
    impl DomainEventHandler<AnimalCreated> for CancellingSpy {
        fn name(&self) -> &str {
            "CancellingSpy"
        }
        async fn handle(
            &self,
            _event: &AnimalCreated,
            cancel: &CancellationToken,
        ) -> anyhow::Result<()> {
            self.log.lock().unwrap().push("CancellingSpy".into());
            cancel.cancel();
            Ok(())
        }
    }

    fn created(animal_id: Uuid) -> Box<dyn DomainEvent> {
        Box::new(AnimalCreated {
            meta: EventMeta::record(animal_id, 1),
            slug: Slug::new("rex").unwrap(),
            name: Name::new("Rex").unwrap(),
            shelter_id: Uuid::new_v4(),
        })
    }

    fn status_changed(animal_id: Uuid) -> Box<dyn DomainEvent> {
        Box::new(AnimalStatusChanged {
            meta: EventMeta::record(animal_id, 2),
            status: FieldChanged::new(AnimalStatus::Available, AnimalStatus::Adopted),
        })
    }

    #[tokio::test]
    async fn handlers_run_in_registration_order_exactly_once() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .register::<AnimalCreated, _>(Arc::new(NotifySpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        dispatcher
            .dispatch(vec![created(Uuid::new_v4())], &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "AuditSpy:AnimalEvent.Created",
                "NotifySpy:AnimalEvent.Created"
            ]
        );
    }

    #[tokio::test]
    async fn events_are_delivered_in_input_order_to_their_own_handlers() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .register::<AnimalStatusChanged, _>(Arc::new(StatusSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        let animal_id = Uuid::new_v4();
        dispatcher
            .dispatch(
                vec![created(animal_id), status_changed(animal_id)],
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        // 事件 i 的处理器全部完成后才开始事件 i+1，且互不串投
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "AuditSpy:AnimalEvent.Created",
                "StatusSpy:available->adopted"
            ]
        );
    }

    #[tokio::test]
    async fn empty_batch_completes_without_invocations() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        dispatcher
            .dispatch(Vec::new(), &CancellationToken::new())
            .await
            .unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn event_without_handlers_is_a_legal_noop() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        let event: Box<dyn DomainEvent> = Box::new(AnimalUpdated {
            meta: EventMeta::record(Uuid::new_v4(), 2),
        });
        dispatcher
            .dispatch(vec![event], &CancellationToken::new())
            .await
            .unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_handler_aborts_the_rest_of_the_batch() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(FailingSpy { log: log.clone() }))
            .register::<AnimalCreated, _>(Arc::new(NotifySpy { log: log.clone() }))
            .register::<AnimalStatusChanged, _>(Arc::new(StatusSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        let animal_id = Uuid::new_v4();
        let err = dispatcher
            .dispatch(
                vec![created(animal_id), status_changed(animal_id)],
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        // 首个失败即中止：同事件的后续处理器与后续事件均未启动
        assert_eq!(*log.lock().unwrap(), vec!["FailingSpy"]);
        match err {
            AppError::EventHandler {
                handler,
                event_type,
                ..
            } => {
                assert_eq!(handler, "FailingSpy");
                assert_eq!(event_type, "AnimalEvent.Created");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_registration_delivers_exactly_once() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        dispatcher
            .dispatch(vec![created(Uuid::new_v4())], &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancellation_stops_before_the_next_handler() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(CancellingSpy { log: log.clone() }))
            .register::<AnimalCreated, _>(Arc::new(NotifySpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        let err = dispatcher
            .dispatch(vec![created(Uuid::new_v4())], &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Cancelled));
        assert_eq!(*log.lock().unwrap(), vec!["CancellingSpy"]);
    }

    #[tokio::test]
    async fn already_cancelled_token_dispatches_nothing() {
        let log: CallLog = Arc::default();
        let registry = HandlerRegistry::builder()
            .register::<AnimalCreated, _>(Arc::new(AuditSpy { log: log.clone() }))
            .build();
        let dispatcher = RegistryDispatcher::new(Arc::new(registry));

        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = dispatcher
            .dispatch(vec![created(Uuid::new_v4())], &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Cancelled));
        assert!(log.lock().unwrap().is_empty());
    }
}
