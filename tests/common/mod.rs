//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

use property_alerts::models::User;
use property_alerts::notify::{Email, EmailSender, Notification, PushMessage, PushSender, SmsMessage, SmsSender};

/// Remembers every message in the order it was sent
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send_email(&self, email: Email) {
        self.sent.lock().unwrap().push(Notification::Email(email));
    }
}

#[async_trait]
impl SmsSender for RecordingSender {
    async fn send_sms(&self, message: SmsMessage) {
        self.sent.lock().unwrap().push(Notification::Sms(message));
    }
}

#[async_trait]
impl PushSender for RecordingSender {
    async fn send_push(&self, message: PushMessage) {
        self.sent.lock().unwrap().push(Notification::Push(message));
    }
}

pub fn test_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "rBatty@email.com".to_string(),
            phone_number: "673777444".to_string(),
        },
        User {
            id: 2,
            email: "rDeckard@email.com".to_string(),
            phone_number: "673777555".to_string(),
        },
    ]
}

/// Write the users file the way an external collaborator would
pub async fn write_users(path: &Path) {
    let json = serde_json::to_string_pretty(&test_users()).unwrap();
    tokio::fs::write(path, json).await.unwrap();
}
