use serde::Serialize;
use uuid::Uuid;

use super::domain_event;
use crate::domain_event::{EventMeta, FieldChanged};
use crate::status::AnimalStatus;
use crate::value_object::{Name, Slug};

/// 动物已创建
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalCreated {
    pub meta: EventMeta,
    pub slug: Slug,
    pub name: Name,
    pub shelter_id: Uuid,
}

domain_event!(AnimalCreated, "AnimalEvent.Created");

/// 动物资料已更新
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalUpdated {
    pub meta: EventMeta,
}

domain_event!(AnimalUpdated, "AnimalEvent.Updated");

/// 动物状态已变更
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalStatusChanged {
    pub meta: EventMeta,
    pub status: FieldChanged<AnimalStatus>,
}

domain_event!(AnimalStatusChanged, "AnimalEvent.StatusChanged");

/// 动物照片已添加
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalPhotoAdded {
    pub meta: EventMeta,
    pub photo_url: String,
}

domain_event!(AnimalPhotoAdded, "AnimalEvent.PhotoAdded");

/// 动物照片已移除
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalPhotoRemoved {
    pub meta: EventMeta,
    pub photo_url: String,
}

domain_event!(AnimalPhotoRemoved, "AnimalEvent.PhotoRemoved");

/// 动物视频已添加
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalVideoAdded {
    pub meta: EventMeta,
    pub video_url: String,
}

domain_event!(AnimalVideoAdded, "AnimalEvent.VideoAdded");

/// 动物视频已移除
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalVideoRemoved {
    pub meta: EventMeta,
    pub video_url: String,
}

domain_event!(AnimalVideoRemoved, "AnimalEvent.VideoRemoved");
