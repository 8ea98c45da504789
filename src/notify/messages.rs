use serde::Serialize;

use crate::models::{AlertType, Property, User};

/// Address every alert email is sent from
pub const SENDER_ADDRESS: &str = "noreply@codium.team";

/// Listings are linked as `<base><property id>`
pub const LISTING_BASE_URL: &str = "https://properties.codium.team/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub body: String,
}

/// One outgoing message, tagged by channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Email(Email),
    Sms(SmsMessage),
    Push(PushMessage),
}

impl Notification {
    /// Announce `property` to `recipient` over `channel`.
    ///
    /// Email goes to the user's address; SMS and push both go to the
    /// user's phone number.
    pub fn new_listing(channel: AlertType, recipient: &User, property: &Property) -> Self {
        let headline = format!("There is a new property at {}", property.postal_code);
        let link = format!("More information at {LISTING_BASE_URL}{}", property.id);

        match channel {
            AlertType::Email => Notification::Email(Email {
                from: SENDER_ADDRESS.to_string(),
                to: recipient.email.clone(),
                subject: headline,
                body: link,
            }),
            AlertType::Sms => Notification::Sms(SmsMessage {
                to: recipient.phone_number.clone(),
                body: format!("{headline}. {link}"),
            }),
            AlertType::Push => Notification::Push(PushMessage {
                to: recipient.phone_number.clone(),
                body: format!("{headline}. {link}"),
            }),
        }
    }

    pub fn channel(&self) -> AlertType {
        match self {
            Notification::Email(_) => AlertType::Email,
            Notification::Sms(_) => AlertType::Sms,
            Notification::Push(_) => AlertType::Push,
        }
    }
}
