pub mod http;
pub mod log_sender;
pub mod messages;
pub mod traits;

pub use http::HttpGateway;
pub use log_sender::TracingSender;
pub use messages::{Email, Notification, PushMessage, SmsMessage, LISTING_BASE_URL, SENDER_ADDRESS};
pub use traits::{EmailSender, PushSender, SmsSender};

#[cfg(test)]
pub use traits::{MockEmailSender, MockPushSender, MockSmsSender};

use std::fmt;
use std::sync::Arc;

/// Routes each notification to the sender for its channel
#[derive(Clone)]
pub struct Notifier {
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    push: Arc<dyn PushSender>,
}

impl Notifier {
    pub fn new(
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        push: Arc<dyn PushSender>,
    ) -> Self {
        Self { email, sms, push }
    }

    /// Use one transport for all three channels
    pub fn uniform<S>(sender: Arc<S>) -> Self
    where
        S: EmailSender + SmsSender + PushSender + 'static,
    {
        Self {
            email: sender.clone(),
            sms: sender.clone(),
            push: sender,
        }
    }

    pub async fn dispatch(&self, notification: Notification) {
        match notification {
            Notification::Email(email) => self.email.send_email(email).await,
            Notification::Sms(message) => self.sms.send_sms(message).await,
            Notification::Push(message) => self.push.send_push(message).await,
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}
