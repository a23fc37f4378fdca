//! 通知边界（NotificationService）
//!
//! 通知的载荷格式、投递渠道与重试/退避策略在上游未被定义，
//! 属于显式的扩展点；默认实现 `NoopNotificationService` 为空操作。
//!
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// 面向用户与管理员的通知发送接口
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 向指定用户发送通知
    async fn notify_user(
        &self,
        user_id: Uuid,
        subject: &str,
        message: &str,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()>;

    /// 向全体管理员发送通知
    async fn notify_moderators(
        &self,
        subject: &str,
        message: &str,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()>;
}

/// 默认通知实现：不做任何事，仅保留调试日志
pub struct NoopNotificationService;

#[async_trait]
impl NotificationService for NoopNotificationService {
    async fn notify_user(
        &self,
        user_id: Uuid,
        subject: &str,
        _message: &str,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        tracing::debug!(user_id = %user_id, subject, "notification skipped (noop service)");
        Ok(())
    }

    async fn notify_moderators(
        &self,
        subject: &str,
        _message: &str,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        tracing::debug!(subject, "moderator notification skipped (noop service)");
        Ok(())
    }
}
