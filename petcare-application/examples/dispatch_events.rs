//! 组合示例：启动时注册处理器，业务操作后分发事件
//!
//! 运行：`cargo run -p petcare-application --example dispatch_events`
use petcare_application::audit::TracingAuditTrail;
use petcare_application::handlers::{
    AnimalCreatedHandler, AnimalPhotoAddedHandler, AnimalStatusChangedHandler,
};
use petcare_application::notification::NoopNotificationService;
use petcare_application::{DomainEventDispatcher, HandlerRegistry, RegistryDispatcher};
use petcare_domain::aggregate::AggregateRoot;
use petcare_domain::aggregates::{Animal, NewAnimal};
use petcare_domain::events::{AnimalCreated, AnimalPhotoAdded, AnimalStatusChanged};
use petcare_domain::status::AnimalStatus;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // 启动组合：显式注册全部处理器，随后注册表冻结
    let audit = Arc::new(TracingAuditTrail);
    let notifications = Arc::new(NoopNotificationService);
    let registry = HandlerRegistry::builder()
        .register::<AnimalCreated, _>(Arc::new(AnimalCreatedHandler::new(audit.clone())))
        .register::<AnimalStatusChanged, _>(Arc::new(AnimalStatusChangedHandler::new(
            audit.clone(),
            notifications.clone(),
        )))
        .register::<AnimalPhotoAdded, _>(Arc::new(AnimalPhotoAddedHandler::new(audit.clone())))
        .build();
    tracing::info!(handlers = registry.handler_count(), "handler registry built");
    let dispatcher = RegistryDispatcher::new(Arc::new(registry));

    // 业务操作：登记动物并变更状态
    let mut animal = Animal::create(
        NewAnimal::builder()
            .slug("Fluffy The Cat")
            .name("Fluffy")
            .owner_id(Uuid::new_v4())
            .breed_id(Uuid::new_v4())
            .shelter_id(Uuid::new_v4())
            .description("Ласкавий кіт".to_string())
            .build(),
    )?;
    animal.add_photo("https://cdn.petcare.example/fluffy.jpg");
    animal.change_status(AnimalStatus::Reserved);

    // 工作单元提交后：取走未提交事件并分发
    let events = animal.take_events();
    dispatcher.dispatch(events, &CancellationToken::new()).await?;

    Ok(())
}
