//! 状态枚举（Status）
//!
//! 动物、领养申请与审计操作的有限状态集合。
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// 动物当前状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalStatus {
    /// 可领养
    Available,
    /// 已领养
    Adopted,
    /// 已被预订
    Reserved,
    /// 治疗中
    InTreatment,
}

impl AnimalStatus {
    /// 是否处于可被领养的状态
    pub fn can_be_adopted(&self) -> bool {
        matches!(self, AnimalStatus::Available)
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnimalStatus::Available => "available",
            AnimalStatus::Adopted => "adopted",
            AnimalStatus::Reserved => "reserved",
            AnimalStatus::InTreatment => "in_treatment",
        };
        f.write_str(s)
    }
}

/// 领养申请状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdoptionStatus {
    /// 待审核
    Pending,
    /// 已通过
    Approved,
    /// 已拒绝
    Rejected,
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdoptionStatus::Pending => "pending",
            AdoptionStatus::Approved => "approved",
            AdoptionStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// 审计操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditOperation {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuditOperation::Insert => "insert",
            AuditOperation::Update => "update",
            AuditOperation::Delete => "delete",
        };
        f.write_str(s)
    }
}
