use tracing::{debug, warn};

use crate::filters::in_range;
use crate::models::{Alert, AlertType, Property, User};
use crate::notify::Notification;

/// True when `property` is in the alert's postal code and within all
/// three of its ranges.
pub fn matches(alert: &Alert, property: &Property) -> bool {
    alert.postal_code == property.postal_code
        && in_range(&alert.price, &property.price)
        && in_range(&alert.rooms, &property.number_of_rooms)
        && in_range(&alert.square_meters, &property.square_meters)
}

/// Matching alerts with the channel each one fires on, in collection order.
///
/// No deduplication: two identical alerts yield two entries.
pub fn notifications_for<'a>(
    property: &'a Property,
    alerts: &'a [Alert],
) -> impl Iterator<Item = (&'a Alert, AlertType)> + 'a {
    alerts
        .iter()
        .filter(move |alert| matches(alert, property))
        .map(|alert| (alert, alert.alert_type))
}

/// Build the outgoing messages for a new property.
///
/// Alerts whose owner is missing from `users` are skipped.
pub fn plan_notifications(property: &Property, alerts: &[Alert], users: &[User]) -> Vec<Notification> {
    let mut planned = Vec::new();

    for (alert, channel) in notifications_for(property, alerts) {
        let Some(owner) = users.iter().find(|user| user.id == alert.user_id) else {
            warn!(
                "Alert owner {} not found, skipping {} notification for property {}",
                alert.user_id, channel, property.id
            );
            continue;
        };

        debug!("Property {} matches {} alert of user {}", property.id, channel, owner.id);
        planned.push(Notification::new_listing(channel, owner, property));
    }

    planned
}
