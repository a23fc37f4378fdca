use serde::{Deserialize, Serialize};

/// 状态类事件携带的字段迁移：同时保留迁移前后的取值
///
/// 例如 `AnimalStatusChanged` 用它描述 `status` 从旧状态到新状态的变化，
/// 处理器据此生成审计载荷与通知文案。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChanged<T> {
    pub old: T,
    pub new: T,
}

impl<T> FieldChanged<T> {
    pub fn new(old: T, new: T) -> Self {
        Self { old, new }
    }
}

impl<T> FieldChanged<T>
where
    T: PartialEq,
{
    /// 旧值与新值不同才算一次真实变更
    pub fn is_changed(&self) -> bool {
        self.old != self.new
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::AnimalStatus;

    #[test]
    fn test_same_value_is_not_a_change() {
        let unchanged = FieldChanged::new(AnimalStatus::Available, AnimalStatus::Available);
        assert!(!unchanged.is_changed());

        let adopted = FieldChanged::new(AnimalStatus::Available, AnimalStatus::Adopted);
        assert!(adopted.is_changed());
        assert_eq!(adopted.old, AnimalStatus::Available);
        assert_eq!(adopted.new, AnimalStatus::Adopted);
    }
}
