//! Field validation for incoming commands.
//!
//! Checks run in a fixed order and the first failure wins: postal code,
//! price sign, price ordering, then (per command) alert type and the
//! referenced user. Room and area bounds are taken as given.

use crate::commands::{AddAlertCommand, AddPropertyCommand, SearchQuery};
use crate::error::ValidationError;
use crate::filters::Range;
use crate::matching::SearchCriteria;
use crate::models::{Alert, AlertType, PostalCode, Property, User, UserId};

pub fn postal_code(value: &str) -> Result<PostalCode, ValidationError> {
    PostalCode::parse(value)
}

/// An absent price is not negative
pub fn non_negative_price(price: Option<i64>) -> Result<(), ValidationError> {
    match price {
        Some(value) if value < 0 => Err(ValidationError::negative_price()),
        _ => Ok(()),
    }
}

pub fn price_range(range: &Range<i64>) -> Result<(), ValidationError> {
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ValidationError::inverted_price_range())
    }
}

pub fn alert_type(value: &str) -> Result<AlertType, ValidationError> {
    value.parse()
}

pub fn known_user(users: &[User], id: UserId) -> Result<&User, ValidationError> {
    users
        .iter()
        .find(|user| user.id == id)
        .ok_or_else(|| ValidationError::unknown_user(id))
}

pub fn known_owner(users: &[User], id: UserId) -> Result<&User, ValidationError> {
    users
        .iter()
        .find(|user| user.id == id)
        .ok_or_else(|| ValidationError::unknown_owner(id))
}

/// Turn an add-alert command into the alert to store
pub fn validate_alert(command: &AddAlertCommand, users: &[User]) -> Result<Alert, ValidationError> {
    let alert = alert_fields(command)?;
    known_user(users, alert.user_id)?;
    Ok(alert)
}

/// Every add-alert check that needs no user lookup
pub fn alert_fields(command: &AddAlertCommand) -> Result<Alert, ValidationError> {
    let postal_code = postal_code(&command.postal_code)?;
    non_negative_price(command.minimum_price)?;
    let price = command.price_range();
    price_range(&price)?;
    let alert_type = alert_type(&command.alert_type)?;

    Ok(Alert {
        user_id: command.user_id,
        alert_type,
        postal_code,
        price,
        rooms: command.room_range(),
        square_meters: command.area_range(),
    })
}

/// Turn an add-property command into the property to store
pub fn validate_property(
    command: &AddPropertyCommand,
    users: &[User],
) -> Result<Property, ValidationError> {
    let property = property_fields(command)?;
    known_owner(users, property.owner_id)?;
    Ok(property)
}

/// Every add-property check that needs no user lookup
pub fn property_fields(command: &AddPropertyCommand) -> Result<Property, ValidationError> {
    let postal_code = postal_code(&command.postal_code)?;
    non_negative_price(Some(command.price))?;

    Ok(Property {
        id: command.id,
        description: command.description.clone(),
        postal_code,
        price: command.price,
        number_of_rooms: command.number_of_rooms,
        square_meters: command.square_meters,
        owner_id: command.owner_id,
    })
}

pub fn validate_search(query: &SearchQuery) -> Result<SearchCriteria, ValidationError> {
    let postal_code = postal_code(&query.postal_code)?;
    non_negative_price(query.minimum_price)?;
    let price = query.price_range();
    price_range(&price)?;

    Ok(SearchCriteria {
        postal_code,
        price,
        rooms: query.room_range(),
        square_meters: query.area_range(),
    })
}
