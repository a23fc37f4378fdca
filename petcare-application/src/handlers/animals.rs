use async_trait::async_trait;
use petcare_domain::aggregate::AggregateRoot;
use petcare_domain::aggregates::Animal;
use petcare_domain::domain_event::DomainEvent;
use petcare_domain::events::{
    AnimalCreated, AnimalPhotoAdded, AnimalPhotoRemoved, AnimalStatusChanged, AnimalUpdated,
    AnimalVideoAdded, AnimalVideoRemoved,
};
use petcare_domain::status::AuditOperation;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::audit::{AuditEntry, AuditTrail};
use crate::event_handler::DomainEventHandler;
use crate::notification::NotificationService;

/// 处理 `AnimalEvent.Created`：登记审计记录
pub struct AnimalCreatedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalCreatedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalCreated> for AnimalCreatedHandler {
    fn name(&self) -> &str {
        "AnimalCreatedHandler"
    }

    async fn handle(&self, event: &AnimalCreated, cancel: &CancellationToken) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Insert,
            Animal::TYPE,
            event,
            json!({
                "slug": event.slug.value(),
                "name": event.name.value(),
                "shelter_id": event.shelter_id,
            }),
        );
        self.audit.append(entry, cancel).await
    }
}

/// 处理 `AnimalEvent.Updated`：登记审计记录
pub struct AnimalUpdatedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalUpdatedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalUpdated> for AnimalUpdatedHandler {
    fn name(&self) -> &str {
        "AnimalUpdatedHandler"
    }

    async fn handle(&self, event: &AnimalUpdated, cancel: &CancellationToken) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(AuditOperation::Update, Animal::TYPE, event, json!({}));
        self.audit.append(entry, cancel).await
    }
}

/// 处理 `AnimalEvent.StatusChanged`：登记审计记录并提醒管理员
pub struct AnimalStatusChangedHandler {
    audit: Arc<dyn AuditTrail>,
    notifications: Arc<dyn NotificationService>,
}

impl AnimalStatusChangedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>, notifications: Arc<dyn NotificationService>) -> Self {
        Self {
            audit,
            notifications,
        }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalStatusChanged> for AnimalStatusChangedHandler {
    fn name(&self) -> &str {
        "AnimalStatusChangedHandler"
    }

    async fn handle(
        &self,
        event: &AnimalStatusChanged,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Update,
            Animal::TYPE,
            event,
            json!({
                "old_status": event.status.old,
                "new_status": event.status.new,
            }),
        );
        self.audit.append(entry, cancel).await?;

        self.notifications
            .notify_moderators(
                "animal status changed",
                &format!(
                    "animal {} changed status: {} -> {}",
                    event.aggregate_id(),
                    event.status.old,
                    event.status.new
                ),
                cancel,
            )
            .await
    }
}

/// 处理 `AnimalEvent.PhotoAdded`：登记审计记录
pub struct AnimalPhotoAddedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalPhotoAddedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalPhotoAdded> for AnimalPhotoAddedHandler {
    fn name(&self) -> &str {
        "AnimalPhotoAddedHandler"
    }

    async fn handle(
        &self,
        event: &AnimalPhotoAdded,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Update,
            Animal::TYPE,
            event,
            json!({ "photo_url": event.photo_url }),
        );
        self.audit.append(entry, cancel).await
    }
}

/// 处理 `AnimalEvent.PhotoRemoved`：登记审计记录
pub struct AnimalPhotoRemovedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalPhotoRemovedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalPhotoRemoved> for AnimalPhotoRemovedHandler {
    fn name(&self) -> &str {
        "AnimalPhotoRemovedHandler"
    }

    async fn handle(
        &self,
        event: &AnimalPhotoRemoved,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Update,
            Animal::TYPE,
            event,
            json!({ "photo_url": event.photo_url }),
        );
        self.audit.append(entry, cancel).await
    }
}

/// 处理 `AnimalEvent.VideoAdded`：登记审计记录
pub struct AnimalVideoAddedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalVideoAddedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalVideoAdded> for AnimalVideoAddedHandler {
    fn name(&self) -> &str {
        "AnimalVideoAddedHandler"
    }

    async fn handle(
        &self,
        event: &AnimalVideoAdded,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Update,
            Animal::TYPE,
            event,
            json!({ "video_url": event.video_url }),
        );
        self.audit.append(entry, cancel).await
    }
}

/// 处理 `AnimalEvent.VideoRemoved`：登记审计记录
pub struct AnimalVideoRemovedHandler {
    audit: Arc<dyn AuditTrail>,
}

impl AnimalVideoRemovedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl DomainEventHandler<AnimalVideoRemoved> for AnimalVideoRemovedHandler {
    fn name(&self) -> &str {
        "AnimalVideoRemovedHandler"
    }

    async fn handle(
        &self,
        event: &AnimalVideoRemoved,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Update,
            Animal::TYPE,
            event,
            json!({ "video_url": event.video_url }),
        );
        self.audit.append(entry, cancel).await
    }
}
