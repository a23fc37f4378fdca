use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::aggregate::AggregateRoot;
use crate::domain_event::{DomainEvent, EventMeta, PendingEvents};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::events::{
    AdoptionApplicationApproved, AdoptionApplicationCreated, AdoptionApplicationRejected,
};
use crate::status::AdoptionStatus;

/// 领养申请聚合
///
/// 由申请人针对某只动物提交，审核后进入终态（通过/拒绝）。
/// 审批操作仅允许在 `Pending` 状态下执行。
#[derive(Debug)]
pub struct AdoptionApplication {
    id: Uuid,
    version: usize,
    applicant_id: Uuid,
    animal_id: Uuid,
    status: AdoptionStatus,
    comment: Option<String>,
    reviewed_by: Option<Uuid>,
    rejection_reason: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: PendingEvents,
}

impl AdoptionApplication {
    /// 提交领养申请，产生 `AdoptionApplicationEvent.Created`
    pub fn create(applicant_id: Uuid, animal_id: Uuid, comment: Option<String>) -> DomainResult<Self> {
        if applicant_id.is_nil() {
            return Err(DomainError::InvalidCommand {
                reason: "applicant id must not be empty".into(),
            });
        }
        if animal_id.is_nil() {
            return Err(DomainError::InvalidCommand {
                reason: "animal id must not be empty".into(),
            });
        }

        let now = Utc::now();
        let mut application = Self {
            id: Uuid::new_v4(),
            version: 0,
            applicant_id,
            animal_id,
            status: AdoptionStatus::Pending,
            comment,
            reviewed_by: None,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
            events: PendingEvents::new(),
        };

        let meta = application.bump();
        application.events.record(Box::new(AdoptionApplicationCreated {
            meta,
            applicant_id,
            animal_id,
        }));
        Ok(application)
    }

    /// 通过申请，产生 `AdoptionApplicationEvent.Approved`
    pub fn approve(&mut self, reviewer_id: Uuid) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = AdoptionStatus::Approved;
        self.reviewed_by = Some(reviewer_id);

        let meta = self.bump();
        self.events.record(Box::new(AdoptionApplicationApproved {
            meta,
            applicant_id: self.applicant_id,
            animal_id: self.animal_id,
            approved_by: reviewer_id,
        }));
        Ok(())
    }

    /// 拒绝申请，产生 `AdoptionApplicationEvent.Rejected`
    pub fn reject(&mut self, reviewer_id: Uuid, reason: &str) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = AdoptionStatus::Rejected;
        self.reviewed_by = Some(reviewer_id);
        self.rejection_reason = Some(reason.to_string());

        let meta = self.bump();
        self.events.record(Box::new(AdoptionApplicationRejected {
            meta,
            applicant_id: self.applicant_id,
            animal_id: self.animal_id,
            rejection_reason: reason.to_string(),
        }));
        Ok(())
    }

    pub fn applicant_id(&self) -> Uuid {
        self.applicant_id
    }

    pub fn animal_id(&self) -> Uuid {
        self.animal_id
    }

    pub fn status(&self) -> AdoptionStatus {
        self.status
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn reviewed_by(&self) -> Option<Uuid> {
        self.reviewed_by
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn ensure_pending(&self) -> DomainResult<()> {
        if self.status != AdoptionStatus::Pending {
            return Err(DomainError::InvalidState {
                reason: format!("application already reviewed: status={}", self.status),
            });
        }
        Ok(())
    }

    fn bump(&mut self) -> EventMeta {
        self.version += 1;
        self.updated_at = Utc::now();
        EventMeta::record(self.id, self.version)
    }
}

impl Entity for AdoptionApplication {
    fn id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> usize {
        self.version
    }
}

impl AggregateRoot for AdoptionApplication {
    const TYPE: &'static str = "adoption_application";

    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        self.events.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> AdoptionApplication {
        AdoptionApplication::create(Uuid::new_v4(), Uuid::new_v4(), Some("хочу кота".into()))
            .unwrap()
    }

    #[test]
    fn create_then_approve_records_both_events() {
        let mut application = pending();
        let reviewer = Uuid::new_v4();
        application.approve(reviewer).unwrap();
        assert_eq!(application.status(), AdoptionStatus::Approved);
        assert_eq!(application.reviewed_by(), Some(reviewer));

        let events = application.take_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "AdoptionApplicationEvent.Created");
        let approved = events[1]
            .as_any()
            .downcast_ref::<AdoptionApplicationApproved>()
            .unwrap();
        assert_eq!(approved.approved_by, reviewer);
        assert_eq!(approved.animal_id, application.animal_id());
    }

    #[test]
    fn reject_keeps_reason() {
        let mut application = pending();
        application
            .reject(Uuid::new_v4(), "no references provided")
            .unwrap();
        assert_eq!(application.status(), AdoptionStatus::Rejected);
        assert_eq!(
            application.rejection_reason(),
            Some("no references provided")
        );
    }

    #[test]
    fn review_is_only_allowed_once() {
        let mut application = pending();
        application.approve(Uuid::new_v4()).unwrap();

        let err = application.reject(Uuid::new_v4(), "too late").unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));

        // 失败的操作不产生事件
        assert_eq!(application.take_events().len(), 2);
        assert!(application.take_events().is_empty());
    }

    #[test]
    fn create_rejects_empty_ids() {
        assert!(matches!(
            AdoptionApplication::create(Uuid::nil(), Uuid::new_v4(), None),
            Err(DomainError::InvalidCommand { .. })
        ));
    }
}
