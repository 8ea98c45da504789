//! Property Listing Handler
//!
//! Stores the new property, then notifies the owner of every matching
//! alert through that alert's channel.

use std::sync::Arc;
use tracing::info;

use crate::audit::AuditSettings;
use crate::error::AppResult;
use crate::matching;
use crate::models::{Alert, Property, User};
use crate::notify::Notifier;
use crate::store::{CollectionSource, CollectionStore};
use crate::validation;

use super::{AddPropertyCommand, AddPropertyResult};

/// Handler for new property listings
pub struct AddProperty {
    properties: Arc<dyn CollectionStore<Property>>,
    users: Arc<dyn CollectionSource<User>>,
    alerts: Arc<dyn CollectionSource<Alert>>,
    notifier: Notifier,
    audit: AuditSettings,
}

impl AddProperty {
    pub fn new(
        properties: Arc<dyn CollectionStore<Property>>,
        users: Arc<dyn CollectionSource<User>>,
        alerts: Arc<dyn CollectionSource<Alert>>,
        notifier: Notifier,
        audit: AuditSettings,
    ) -> Self {
        Self {
            properties,
            users,
            alerts,
            notifier,
            audit,
        }
    }

    pub async fn execute(&self, command: AddPropertyCommand) -> AppResult<AddPropertyResult> {
        let property = validation::property_fields(&command)?;
        let users = self.users.load_all().await;
        validation::known_owner(&users, property.owner_id)?;

        let mut properties = self.properties.load_for_update().await?;
        properties.push(property.clone());
        self.properties.save_all(&properties).await?;

        info!("Listed property {} at {}", property.id, property.postal_code);

        let alerts = self.alerts.load_all().await;
        let notifications = matching::plan_notifications(&property, &alerts, &users);
        let notifications_sent = notifications.len();

        for notification in notifications {
            self.notifier.dispatch(notification).await;
        }

        if notifications_sent > 0 {
            info!("Sent {} alert(s) for property {}", notifications_sent, property.id);
        }

        self.audit.record(command.audit_fields());

        Ok(AddPropertyResult {
            property,
            notifications_sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::InMemoryAuditLogger;
    use crate::error::{AppError, ValidationError};
    use crate::filters::Range;
    use crate::models::{AlertType, PostalCode};
    use crate::notify::{
        Email, MockEmailSender, MockPushSender, MockSmsSender, PushMessage, SmsMessage,
    };
    use crate::store::InMemoryStore;
    use mockall::predicate::eq;
    use serde_json::json;

    const NON_EXISTING_OWNER: u64 = 999_999;

    fn users() -> Arc<InMemoryStore<User>> {
        Arc::new(InMemoryStore::with_items(vec![
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
        ]))
    }

    fn open_alert(user_id: u64, alert_type: AlertType) -> Alert {
        Alert {
            user_id,
            alert_type,
            postal_code: PostalCode::parse("04600").unwrap(),
            price: Range::unbounded(),
            rooms: Range::unbounded(),
            square_meters: Range::unbounded(),
        }
    }

    fn command(id: u64, owner_id: u64) -> AddPropertyCommand {
        AddPropertyCommand {
            id,
            description: "New property".to_string(),
            postal_code: "04600".to_string(),
            price: 100_000,
            number_of_rooms: 3,
            square_meters: 160,
            owner_id,
        }
    }

    /// Users source that must never be consulted
    struct UntouchedUsers;

    #[async_trait::async_trait]
    impl CollectionSource<User> for UntouchedUsers {
        async fn load_all(&self) -> Vec<User> {
            panic!("users were read before the field checks passed");
        }
    }

    fn silent_notifier() -> Notifier {
        let mut email = MockEmailSender::new();
        email.expect_send_email().never();
        let mut sms = MockSmsSender::new();
        sms.expect_send_sms().never();
        let mut push = MockPushSender::new();
        push.expect_send_push().never();
        Notifier::new(Arc::new(email), Arc::new(sms), Arc::new(push))
    }

    fn handler(
        properties: Arc<InMemoryStore<Property>>,
        alerts: Vec<Alert>,
        notifier: Notifier,
        audit: AuditSettings,
    ) -> AddProperty {
        AddProperty::new(
            properties,
            users(),
            Arc::new(InMemoryStore::with_items(alerts)),
            notifier,
            audit,
        )
    }

    #[tokio::test]
    async fn test_new_property_is_stored() {
        let properties = Arc::new(InMemoryStore::new());
        let handler = handler(properties.clone(), vec![], silent_notifier(), AuditSettings::disabled());

        let cmd = AddPropertyCommand {
            id: 123,
            price: 140_000,
            ..command(123, 1)
        };
        handler.execute(cmd).await.unwrap();

        let stored = properties.items();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, 123);
        assert_eq!(stored[0].description, "New property");
        assert_eq!(stored[0].price, 140_000);
        assert_eq!(stored[0].number_of_rooms, 3);
        assert_eq!(stored[0].square_meters, 160);
        assert_eq!(stored[0].owner_id, 1);
    }

    #[tokio::test]
    async fn test_can_store_more_than_one_property() {
        let properties = Arc::new(InMemoryStore::new());
        let handler = handler(properties.clone(), vec![], silent_notifier(), AuditSettings::disabled());

        handler.execute(command(1, 1)).await.unwrap();
        handler.execute(command(2, 1)).await.unwrap();

        assert_eq!(properties.items().len(), 2);
    }

    #[tokio::test]
    async fn test_fails_when_owner_does_not_exist() {
        let properties = Arc::new(InMemoryStore::new());
        let handler = handler(
            properties.clone(),
            vec![open_alert(2, AlertType::Email)],
            silent_notifier(),
            AuditSettings::disabled(),
        );

        let err = handler.execute(command(1, NON_EXISTING_OWNER)).await.unwrap_err();

        assert_eq!(err.to_string(), "The owner 999999 does not exist");
        assert!(properties.items().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_postal_code_sends_nothing() {
        let properties = Arc::new(InMemoryStore::new());
        let handler = handler(
            properties.clone(),
            vec![open_alert(2, AlertType::Email)],
            silent_notifier(),
            AuditSettings::disabled(),
        );

        let cmd = AddPropertyCommand {
            postal_code: "046000".to_string(),
            ..command(1, 1)
        };
        let err = handler.execute(cmd).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidPostalCode(_))
        ));
        assert!(properties.items().is_empty());
    }

    #[tokio::test]
    async fn test_field_errors_are_reported_before_reading_users() {
        let properties = Arc::new(InMemoryStore::<Property>::new());
        let handler = AddProperty::new(
            properties.clone(),
            Arc::new(UntouchedUsers),
            Arc::new(InMemoryStore::with_items(vec![open_alert(2, AlertType::Email)])),
            silent_notifier(),
            AuditSettings::disabled(),
        );

        let postal = handler
            .execute(AddPropertyCommand {
                postal_code: "046000".to_string(),
                ..command(1, 1)
            })
            .await
            .unwrap_err();
        let price = handler
            .execute(AddPropertyCommand {
                price: -1,
                ..command(1, 1)
            })
            .await
            .unwrap_err();

        assert!(matches!(postal.as_validation(), Some(ValidationError::InvalidPostalCode(_))));
        assert_eq!(price.as_validation(), Some(&ValidationError::negative_price()));
        assert!(properties.items().is_empty());
    }

    #[tokio::test]
    async fn test_send_alert_by_email_when_email_alert() {
        let mut email = MockEmailSender::new();
        email
            .expect_send_email()
            .with(eq(Email {
                from: "noreply@codium.team".to_string(),
                to: "rDeckard@email.com".to_string(),
                subject: "There is a new property at 04600".to_string(),
                body: "More information at https://properties.codium.team/1".to_string(),
            }))
            .times(1)
            .return_const(());
        let mut sms = MockSmsSender::new();
        sms.expect_send_sms().never();
        let mut push = MockPushSender::new();
        push.expect_send_push().never();
        let notifier = Notifier::new(Arc::new(email), Arc::new(sms), Arc::new(push));

        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![open_alert(2, AlertType::Email)],
            notifier,
            AuditSettings::disabled(),
        );

        let result = handler.execute(command(1, 2)).await.unwrap();

        assert_eq!(result.notifications_sent, 1);
    }

    #[tokio::test]
    async fn test_send_alert_by_sms_when_sms_alert() {
        let mut email = MockEmailSender::new();
        email.expect_send_email().never();
        let mut sms = MockSmsSender::new();
        sms.expect_send_sms()
            .with(eq(SmsMessage {
                to: "673777555".to_string(),
                body: "There is a new property at 04600. More information at https://properties.codium.team/1"
                    .to_string(),
            }))
            .times(1)
            .return_const(());
        let mut push = MockPushSender::new();
        push.expect_send_push().never();
        let notifier = Notifier::new(Arc::new(email), Arc::new(sms), Arc::new(push));

        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![open_alert(2, AlertType::Sms)],
            notifier,
            AuditSettings::disabled(),
        );

        handler.execute(command(1, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_alert_by_push_when_push_alert() {
        let mut email = MockEmailSender::new();
        email.expect_send_email().never();
        let mut sms = MockSmsSender::new();
        sms.expect_send_sms().never();
        let mut push = MockPushSender::new();
        push.expect_send_push()
            .with(eq(PushMessage {
                to: "673777555".to_string(),
                body: "There is a new property at 04600. More information at https://properties.codium.team/1"
                    .to_string(),
            }))
            .times(1)
            .return_const(());
        let notifier = Notifier::new(Arc::new(email), Arc::new(sms), Arc::new(push));

        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![open_alert(2, AlertType::Push)],
            notifier,
            AuditSettings::disabled(),
        );

        handler.execute(command(1, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_sends_the_right_amount_of_alerts() {
        let mut email = MockEmailSender::new();
        email.expect_send_email().times(2).return_const(());
        let mut sms = MockSmsSender::new();
        sms.expect_send_sms().times(1).return_const(());
        let mut push = MockPushSender::new();
        push.expect_send_push().times(1).return_const(());
        let notifier = Notifier::new(Arc::new(email), Arc::new(sms), Arc::new(push));

        let mut elsewhere = open_alert(1, AlertType::Push);
        elsewhere.postal_code = PostalCode::parse("08030").unwrap();
        let alerts = vec![
            open_alert(2, AlertType::Email),
            open_alert(2, AlertType::Sms),
            open_alert(2, AlertType::Push),
            open_alert(2, AlertType::Email),
            elsewhere,
        ];
        let handler = handler(Arc::new(InMemoryStore::new()), alerts, notifier, AuditSettings::disabled());

        let result = handler.execute(command(1, 2)).await.unwrap();

        assert_eq!(result.notifications_sent, 4);
    }

    #[tokio::test]
    async fn test_no_alert_when_rooms_below_minimum() {
        let mut alert = open_alert(2, AlertType::Email);
        alert.rooms = Range::new(Some(4), None);
        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![alert],
            silent_notifier(),
            AuditSettings::disabled(),
        );

        let result = handler.execute(command(1, 2)).await.unwrap();

        assert_eq!(result.notifications_sent, 0);
    }

    #[tokio::test]
    async fn test_logs_the_request_when_there_is_a_logger() {
        let logger = Arc::new(InMemoryAuditLogger::new());
        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![],
            silent_notifier(),
            AuditSettings::new(logger.clone()),
        );

        handler.execute(command(1, 2)).await.unwrap();

        let records = logger.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record["id"], json!(1));
        assert_eq!(record["description"], json!("New property"));
        assert_eq!(record["postalCode"], json!("04600"));
        assert_eq!(record["price"], json!(100_000));
        assert_eq!(record["numberOfRooms"], json!(3));
        assert_eq!(record["squareMeters"], json!(160));
        assert_eq!(record["ownerId"], json!(2));
        assert!(!record.contains_key("date"));
    }

    #[tokio::test]
    async fn test_logged_request_contains_date_when_required() {
        let logger = Arc::new(InMemoryAuditLogger::new());
        let handler = handler(
            Arc::new(InMemoryStore::new()),
            vec![],
            silent_notifier(),
            AuditSettings::new(logger.clone()).with_date(true),
        );

        handler.execute(command(1, 2)).await.unwrap();

        assert!(logger.records()[0].contains_key("date"));
    }
}
