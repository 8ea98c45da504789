use async_trait::async_trait;
use tracing::info;

use super::messages::{Email, PushMessage, SmsMessage};
use super::traits::{EmailSender, PushSender, SmsSender};

/// Logs messages instead of delivering them
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSender;

#[async_trait]
impl EmailSender for TracingSender {
    async fn send_email(&self, email: Email) {
        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "📧 {}",
            email.body
        );
    }
}

#[async_trait]
impl SmsSender for TracingSender {
    async fn send_sms(&self, message: SmsMessage) {
        info!(to = %message.to, "💬 {}", message.body);
    }
}

#[async_trait]
impl PushSender for TracingSender {
    async fn send_push(&self, message: PushMessage) {
        info!(to = %message.to, "🔔 {}", message.body);
    }
}
