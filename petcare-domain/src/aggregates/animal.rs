use bon::Builder;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::aggregate::AggregateRoot;
use crate::domain_event::{DomainEvent, EventMeta, FieldChanged, PendingEvents};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::events::{
    AnimalCreated, AnimalPhotoAdded, AnimalPhotoRemoved, AnimalStatusChanged, AnimalUpdated,
    AnimalVideoAdded, AnimalVideoRemoved,
};
use crate::status::AnimalStatus;
use crate::value_object::{Name, Slug};

/// 动物登记表单（创建 `Animal` 的输入）
#[derive(Builder, Debug, Clone)]
#[builder(on(String, into))]
pub struct NewAnimal {
    pub slug: String,
    pub name: String,
    /// 负责人（登记该动物的用户）
    pub owner_id: Uuid,
    pub breed_id: Uuid,
    pub shelter_id: Uuid,
    #[builder(default = AnimalStatus::Available)]
    pub status: AnimalStatus,
    pub description: Option<String>,
    pub health_status: Option<String>,
    pub adoption_requirements: Option<String>,
    pub weight: Option<f32>,
    pub height: Option<f32>,
    pub color: Option<String>,
    #[builder(default)]
    pub is_sterilized: bool,
    #[builder(default)]
    pub have_documents: bool,
}

/// 动物资料的部分更新（未提供的字段保持不变）
#[derive(Builder, Debug, Clone, Default)]
#[builder(on(String, into))]
pub struct AnimalUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub health_status: Option<String>,
    pub adoption_requirements: Option<String>,
    pub weight: Option<f32>,
    pub height: Option<f32>,
    pub color: Option<String>,
    pub is_sterilized: Option<bool>,
    pub have_documents: Option<bool>,
}

impl AnimalUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.health_status.is_none()
            && self.adoption_requirements.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.color.is_none()
            && self.is_sterilized.is_none()
            && self.have_documents.is_none()
    }
}

/// 动物聚合
///
/// 收容所中的一只动物及其领养状态与媒体资料。
/// 所有状态变更经由业务方法完成并产生对应事件；事件缓冲对外不可见，
/// 仅能通过 `take_events` 一次性取走。
#[derive(Debug)]
pub struct Animal {
    id: Uuid,
    version: usize,
    slug: Slug,
    name: Name,
    owner_id: Uuid,
    breed_id: Uuid,
    shelter_id: Uuid,
    status: AnimalStatus,
    description: Option<String>,
    health_status: Option<String>,
    adoption_requirements: Option<String>,
    weight: Option<f32>,
    height: Option<f32>,
    color: Option<String>,
    is_sterilized: bool,
    have_documents: bool,
    photos: Vec<String>,
    videos: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: PendingEvents,
}

impl Animal {
    /// 登记一只新动物，产生 `AnimalEvent.Created`
    pub fn create(form: NewAnimal) -> DomainResult<Self> {
        if form.owner_id.is_nil() {
            return Err(DomainError::InvalidCommand {
                reason: "owner id must not be empty".into(),
            });
        }
        if form.breed_id.is_nil() {
            return Err(DomainError::InvalidCommand {
                reason: "breed id must not be empty".into(),
            });
        }
        if form.shelter_id.is_nil() {
            return Err(DomainError::InvalidCommand {
                reason: "shelter id must not be empty".into(),
            });
        }

        let now = Utc::now();
        let mut animal = Self {
            id: Uuid::new_v4(),
            version: 0,
            slug: Slug::new(&form.slug)?,
            name: Name::new(&form.name)?,
            owner_id: form.owner_id,
            breed_id: form.breed_id,
            shelter_id: form.shelter_id,
            status: form.status,
            description: form.description,
            health_status: form.health_status,
            adoption_requirements: form.adoption_requirements,
            weight: form.weight,
            height: form.height,
            color: form.color,
            is_sterilized: form.is_sterilized,
            have_documents: form.have_documents,
            photos: Vec::new(),
            videos: Vec::new(),
            created_at: now,
            updated_at: now,
            events: PendingEvents::new(),
        };

        let meta = animal.bump();
        let event = AnimalCreated {
            meta,
            slug: animal.slug.clone(),
            name: animal.name.clone(),
            shelter_id: animal.shelter_id,
        };
        animal.events.record(Box::new(event));
        Ok(animal)
    }

    /// 部分更新资料，产生 `AnimalEvent.Updated`；空表单为无操作
    pub fn update(&mut self, update: AnimalUpdate) -> DomainResult<()> {
        if update.is_empty() {
            return Ok(());
        }

        if let Some(name) = update.name {
            self.name = Name::new(&name)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(health_status) = update.health_status {
            self.health_status = Some(health_status);
        }
        if let Some(requirements) = update.adoption_requirements {
            self.adoption_requirements = Some(requirements);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(height) = update.height {
            self.height = Some(height);
        }
        if let Some(color) = update.color {
            self.color = Some(color);
        }
        if let Some(is_sterilized) = update.is_sterilized {
            self.is_sterilized = is_sterilized;
        }
        if let Some(have_documents) = update.have_documents {
            self.have_documents = have_documents;
        }

        let meta = self.bump();
        self.events.record(Box::new(AnimalUpdated { meta }));
        Ok(())
    }

    /// 变更领养状态，产生 `AnimalEvent.StatusChanged`；状态未变化为无操作
    pub fn change_status(&mut self, new_status: AnimalStatus) {
        if self.status == new_status {
            return;
        }

        let old_status = self.status;
        self.status = new_status;

        let meta = self.bump();
        self.events.record(Box::new(AnimalStatusChanged {
            meta,
            status: FieldChanged::new(old_status, new_status),
        }));
    }

    /// 添加照片，产生 `AnimalEvent.PhotoAdded`；空白或重复链接为无操作
    pub fn add_photo(&mut self, url: &str) {
        if url.trim().is_empty() || self.photos.iter().any(|p| p == url) {
            return;
        }
        self.photos.push(url.to_string());

        let meta = self.bump();
        self.events.record(Box::new(AnimalPhotoAdded {
            meta,
            photo_url: url.to_string(),
        }));
    }

    /// 移除照片，产生 `AnimalEvent.PhotoRemoved`；链接不存在为无操作
    pub fn remove_photo(&mut self, url: &str) {
        let Some(pos) = self.photos.iter().position(|p| p == url) else {
            return;
        };
        self.photos.remove(pos);

        let meta = self.bump();
        self.events.record(Box::new(AnimalPhotoRemoved {
            meta,
            photo_url: url.to_string(),
        }));
    }

    /// 添加视频，产生 `AnimalEvent.VideoAdded`；空白或重复链接为无操作
    pub fn add_video(&mut self, url: &str) {
        if url.trim().is_empty() || self.videos.iter().any(|v| v == url) {
            return;
        }
        self.videos.push(url.to_string());

        let meta = self.bump();
        self.events.record(Box::new(AnimalVideoAdded {
            meta,
            video_url: url.to_string(),
        }));
    }

    /// 移除视频，产生 `AnimalEvent.VideoRemoved`；链接不存在为无操作
    pub fn remove_video(&mut self, url: &str) {
        let Some(pos) = self.videos.iter().position(|v| v == url) else {
            return;
        };
        self.videos.remove(pos);

        let meta = self.bump();
        self.events.record(Box::new(AnimalVideoRemoved {
            meta,
            video_url: url.to_string(),
        }));
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn breed_id(&self) -> Uuid {
        self.breed_id
    }

    pub fn shelter_id(&self) -> Uuid {
        self.shelter_id
    }

    pub fn status(&self) -> AnimalStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    pub fn can_be_adopted(&self) -> bool {
        self.status.can_be_adopted()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 一次有效的状态变更：递增版本、刷新修改时间，返回对应事件的元信息
    fn bump(&mut self) -> EventMeta {
        self.version += 1;
        self.updated_at = Utc::now();
        EventMeta::record(self.id, self.version)
    }
}

impl Entity for Animal {
    fn id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> usize {
        self.version
    }
}

impl AggregateRoot for Animal {
    const TYPE: &'static str = "animal";

    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        self.events.take()
    }
}
