use async_trait::async_trait;
use petcare_domain::aggregate::AggregateRoot;
use petcare_domain::aggregates::AdoptionApplication;
use petcare_domain::events::{
    AdoptionApplicationApproved, AdoptionApplicationCreated, AdoptionApplicationRejected,
};
use petcare_domain::status::AuditOperation;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::audit::{AuditEntry, AuditTrail};
use crate::event_handler::DomainEventHandler;
use crate::notification::NotificationService;

/// 处理 `AdoptionApplicationEvent.Created`：登记审计记录并提醒管理员
pub struct AdoptionApplicationCreatedHandler {
    audit: Arc<dyn AuditTrail>,
    notifications: Arc<dyn NotificationService>,
}

impl AdoptionApplicationCreatedHandler {
    pub fn new(audit: Arc<dyn AuditTrail>, notifications: Arc<dyn NotificationService>) -> Self {
        Self {
            audit,
            notifications,
        }
    }
}

#[async_trait]
impl DomainEventHandler<AdoptionApplicationCreated> for AdoptionApplicationCreatedHandler {
    fn name(&self) -> &str {
        "AdoptionApplicationCreatedHandler"
    }

    async fn handle(
        &self,
        event: &AdoptionApplicationCreated,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let entry = AuditEntry::from_event(
            AuditOperation::Insert,
            AdoptionApplication::TYPE,
            event,
            json!({
                "applicant_id": event.applicant_id,
                "animal_id": event.animal_id,
            }),
        );
        self.audit.append(entry, cancel).await?;

        self.notifications
            .notify_moderators(
                "adoption application submitted",
                &format!(
                    "user {} applied to adopt animal {}",
                    event.applicant_id, event.animal_id
                ),
                cancel,
            )
            .await
    }
}

/// 处理 `AdoptionApplicationEvent.Approved`：通知申请人
pub struct AdoptionApplicationApprovedHandler {
    notifications: Arc<dyn NotificationService>,
}

impl AdoptionApplicationApprovedHandler {
    pub fn new(notifications: Arc<dyn NotificationService>) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl DomainEventHandler<AdoptionApplicationApproved> for AdoptionApplicationApprovedHandler {
    fn name(&self) -> &str {
        "AdoptionApplicationApprovedHandler"
    }

    async fn handle(
        &self,
        event: &AdoptionApplicationApproved,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        self.notifications
            .notify_user(
                event.applicant_id,
                "adoption application approved",
                &format!("your application to adopt animal {} was approved", event.animal_id),
                cancel,
            )
            .await
    }
}

/// 处理 `AdoptionApplicationEvent.Rejected`：通知申请人并附拒绝理由
pub struct AdoptionApplicationRejectedHandler {
    notifications: Arc<dyn NotificationService>,
}

impl AdoptionApplicationRejectedHandler {
    pub fn new(notifications: Arc<dyn NotificationService>) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl DomainEventHandler<AdoptionApplicationRejected> for AdoptionApplicationRejectedHandler {
    fn name(&self) -> &str {
        "AdoptionApplicationRejectedHandler"
    }

    async fn handle(
        &self,
        event: &AdoptionApplicationRejected,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        self.notifications
            .notify_user(
                event.applicant_id,
                "adoption application rejected",
                &format!(
                    "your application to adopt animal {} was rejected: {}",
                    event.animal_id, event.rejection_reason
                ),
                cancel,
            )
            .await
    }
}
