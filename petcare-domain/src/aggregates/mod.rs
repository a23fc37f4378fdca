//! 聚合实现
//!
//! 每个聚合的状态变更方法遵循同一约定：校验前置条件 → 修改内部状态 →
//! 递增版本 → 向私有缓冲追加对应事件。

mod adoption_application;
mod animal;

pub use adoption_application::AdoptionApplication;
pub use animal::{Animal, AnimalUpdate, NewAnimal};
