use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::filters::Range;

pub type UserId = u64;
pub type PropertyId = u64;

/// Five-digit postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a postal code, accepting exactly five ASCII digits
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::invalid_postal_code(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Channel an alert is delivered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AlertType {
    Email,
    Sms,
    Push,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Email => "email",
            AlertType::Sms => "sms",
            AlertType::Push => "push",
        }
    }
}

impl FromStr for AlertType {
    type Err = ValidationError;

    /// Case-insensitive: "EMAIL", "email" and "Email" are the same channel.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "EMAIL" => Ok(AlertType::Email),
            "SMS" => Ok(AlertType::Sms),
            "PUSH" => Ok(AlertType::Push),
            _ => Err(ValidationError::invalid_alert_type(value)),
        }
    }
}

impl TryFrom<String> for AlertType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlertType> for String {
    fn from(value: AlertType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user, read-only reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone_number: String,
}

/// Property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub description: String,
    pub postal_code: PostalCode,
    pub price: i64,
    pub number_of_rooms: i32,
    pub square_meters: i32,
    pub owner_id: UserId,
}

/// A user's subscription to new listings matching some criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AlertRecord", into = "AlertRecord")]
pub struct Alert {
    pub user_id: UserId,
    pub alert_type: AlertType,
    pub postal_code: PostalCode,
    pub price: Range<i64>,
    pub rooms: Range<i32>,
    pub square_meters: Range<i32>,
}

/// Flat on-disk shape of an [`Alert`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertRecord {
    user_id: UserId,
    alert_type: AlertType,
    postal_code: PostalCode,
    minimum_price: Option<i64>,
    maximum_price: Option<i64>,
    minimum_rooms: Option<i32>,
    maximum_rooms: Option<i32>,
    minimum_square_meters: Option<i32>,
    maximum_square_meters: Option<i32>,
}

impl From<AlertRecord> for Alert {
    fn from(record: AlertRecord) -> Self {
        Self {
            user_id: record.user_id,
            alert_type: record.alert_type,
            postal_code: record.postal_code,
            price: Range::new(record.minimum_price, record.maximum_price),
            rooms: Range::new(record.minimum_rooms, record.maximum_rooms),
            square_meters: Range::new(record.minimum_square_meters, record.maximum_square_meters),
        }
    }
}

impl From<Alert> for AlertRecord {
    fn from(alert: Alert) -> Self {
        Self {
            user_id: alert.user_id,
            alert_type: alert.alert_type,
            postal_code: alert.postal_code,
            minimum_price: alert.price.minimum,
            maximum_price: alert.price.maximum,
            minimum_rooms: alert.rooms.minimum,
            maximum_rooms: alert.rooms.maximum,
            minimum_square_meters: alert.square_meters.minimum,
            maximum_square_meters: alert.square_meters.maximum,
        }
    }
}
