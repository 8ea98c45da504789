//! Command definitions
//!
//! Raw caller input, validated by the handlers before use.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::audit::AuditRecord;
use crate::filters::Range;
use crate::models::{Alert, Property, PropertyId, UserId};

/// Register an alert for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAlertCommand {
    pub user_id: UserId,
    /// Channel name as typed by the caller, matched case-insensitively
    pub alert_type: String,
    pub postal_code: String,
    pub minimum_price: Option<i64>,
    pub maximum_price: Option<i64>,
    pub minimum_rooms: Option<i32>,
    pub maximum_rooms: Option<i32>,
    pub minimum_square_meters: Option<i32>,
    pub maximum_square_meters: Option<i32>,
}

impl AddAlertCommand {
    pub fn new(user_id: UserId, alert_type: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            user_id,
            alert_type: alert_type.into(),
            postal_code: postal_code.into(),
            minimum_price: None,
            maximum_price: None,
            minimum_rooms: None,
            maximum_rooms: None,
            minimum_square_meters: None,
            maximum_square_meters: None,
        }
    }

    pub fn with_price(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum_price = minimum;
        self.maximum_price = maximum;
        self
    }

    pub fn with_rooms(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_rooms = minimum;
        self.maximum_rooms = maximum;
        self
    }

    pub fn with_square_meters(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_square_meters = minimum;
        self.maximum_square_meters = maximum;
        self
    }

    pub fn price_range(&self) -> Range<i64> {
        Range::new(self.minimum_price, self.maximum_price)
    }

    pub fn room_range(&self) -> Range<i32> {
        Range::new(self.minimum_rooms, self.maximum_rooms)
    }

    pub fn area_range(&self) -> Range<i32> {
        Range::new(self.minimum_square_meters, self.maximum_square_meters)
    }

    pub fn audit_fields(&self) -> AuditRecord {
        record(json!({
            "userId": self.user_id,
            "alertType": self.alert_type,
            "postalCode": self.postal_code,
            "minimumPrice": self.minimum_price,
            "maximumPrice": self.maximum_price,
            "minimumRooms": self.minimum_rooms,
            "maximumRooms": self.maximum_rooms,
            "minimumSquareMeters": self.minimum_square_meters,
            "maximumSquareMeters": self.maximum_square_meters,
        }))
    }
}

/// Publish a new property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPropertyCommand {
    pub id: PropertyId,
    pub description: String,
    pub postal_code: String,
    pub price: i64,
    pub number_of_rooms: i32,
    pub square_meters: i32,
    pub owner_id: UserId,
}

impl AddPropertyCommand {
    pub fn audit_fields(&self) -> AuditRecord {
        record(json!({
            "id": self.id,
            "description": self.description,
            "postalCode": self.postal_code,
            "price": self.price,
            "numberOfRooms": self.number_of_rooms,
            "squareMeters": self.square_meters,
            "ownerId": self.owner_id,
        }))
    }
}

/// Search parameters for listed properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub postal_code: String,
    pub minimum_price: Option<i64>,
    pub maximum_price: Option<i64>,
    pub minimum_rooms: Option<i32>,
    pub maximum_rooms: Option<i32>,
    pub minimum_square_meters: Option<i32>,
    pub maximum_square_meters: Option<i32>,
}

impl SearchQuery {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            minimum_price: None,
            maximum_price: None,
            minimum_rooms: None,
            maximum_rooms: None,
            minimum_square_meters: None,
            maximum_square_meters: None,
        }
    }

    pub fn with_price(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum_price = minimum;
        self.maximum_price = maximum;
        self
    }

    pub fn with_rooms(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_rooms = minimum;
        self.maximum_rooms = maximum;
        self
    }

    pub fn with_square_meters(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_square_meters = minimum;
        self.maximum_square_meters = maximum;
        self
    }

    pub fn price_range(&self) -> Range<i64> {
        Range::new(self.minimum_price, self.maximum_price)
    }

    pub fn room_range(&self) -> Range<i32> {
        Range::new(self.minimum_rooms, self.maximum_rooms)
    }

    pub fn area_range(&self) -> Range<i32> {
        Range::new(self.minimum_square_meters, self.maximum_square_meters)
    }

    pub fn audit_fields(&self) -> AuditRecord {
        record(json!({
            "postalCode": self.postal_code,
            "minimumPrice": self.minimum_price,
            "maximumPrice": self.maximum_price,
            "minimumRooms": self.minimum_rooms,
            "maximumRooms": self.maximum_rooms,
            "minimumSquareMeters": self.minimum_square_meters,
            "maximumSquareMeters": self.maximum_square_meters,
        }))
    }
}

/// Result of a successful alert registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddAlertResult {
    pub alert: Alert,
}

/// Result of a successful property listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPropertyResult {
    pub property: Property,
    pub notifications_sent: usize,
}

fn record(value: Value) -> AuditRecord {
    match value {
        Value::Object(map) => map,
        _ => AuditRecord::new(),
    }
}
