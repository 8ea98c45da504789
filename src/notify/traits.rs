use async_trait::async_trait;

use super::messages::{Email, PushMessage, SmsMessage};

/// Email transport. Delivery failures stay inside the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: Email);
}

/// SMS transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_sms(&self, message: SmsMessage);
}

/// Push notification transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushSender: Send + Sync {
    async fn send_push(&self, message: PushMessage);
}
