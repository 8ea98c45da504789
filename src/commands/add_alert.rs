//! Alert Registration Handler

use std::sync::Arc;
use tracing::info;

use crate::audit::AuditSettings;
use crate::error::AppResult;
use crate::models::{Alert, User};
use crate::store::{CollectionSource, CollectionStore};
use crate::validation;

use super::{AddAlertCommand, AddAlertResult};

/// Handler for alert registration
pub struct AddAlert {
    alerts: Arc<dyn CollectionStore<Alert>>,
    users: Arc<dyn CollectionSource<User>>,
    audit: AuditSettings,
}

impl AddAlert {
    pub fn new(
        alerts: Arc<dyn CollectionStore<Alert>>,
        users: Arc<dyn CollectionSource<User>>,
        audit: AuditSettings,
    ) -> Self {
        Self { alerts, users, audit }
    }

    /// Validate and append the alert. Identical alerts are all kept.
    pub async fn execute(&self, command: AddAlertCommand) -> AppResult<AddAlertResult> {
        let alert = validation::alert_fields(&command)?;
        let users = self.users.load_all().await;
        validation::known_user(&users, alert.user_id)?;

        let mut alerts = self.alerts.load_for_update().await?;
        alerts.push(alert.clone());
        self.alerts.save_all(&alerts).await?;

        info!(
            "Registered {} alert for user {} at {}",
            alert.alert_type, alert.user_id, alert.postal_code
        );

        self.audit.record(command.audit_fields());

        Ok(AddAlertResult { alert })
    }
}
