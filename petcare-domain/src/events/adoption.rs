use serde::Serialize;
use uuid::Uuid;

use super::domain_event;
use crate::domain_event::EventMeta;

/// 领养申请已提交
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionApplicationCreated {
    pub meta: EventMeta,
    pub applicant_id: Uuid,
    pub animal_id: Uuid,
}

domain_event!(AdoptionApplicationCreated, "AdoptionApplicationEvent.Created");

/// 领养申请已通过
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionApplicationApproved {
    pub meta: EventMeta,
    pub applicant_id: Uuid,
    pub animal_id: Uuid,
    pub approved_by: Uuid,
}

domain_event!(
    AdoptionApplicationApproved,
    "AdoptionApplicationEvent.Approved"
);

/// 领养申请已拒绝
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionApplicationRejected {
    pub meta: EventMeta,
    pub applicant_id: Uuid,
    pub animal_id: Uuid,
    pub rejection_reason: String,
}

domain_event!(
    AdoptionApplicationRejected,
    "AdoptionApplicationEvent.Rejected"
);
