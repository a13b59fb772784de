mod ses_notification_provider;

use crate::error::SendError;
use crate::notification::{NotificationRequest, NotificationResult};
use async_trait::async_trait;
pub use ses_notification_provider::SesNotificationProvider;

#[async_trait]
pub trait NotificationProvider: Send + Sync {
    async fn send(
        &self,
        notification: &NotificationRequest,
    ) -> Result<NotificationResult, SendError>;
}
