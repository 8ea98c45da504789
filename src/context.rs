//! Handler wiring from [`Config`].

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::audit::{AuditSettings, TracingAuditLogger};
use crate::commands::{AddAlert, AddProperty, SearchProperty};
use crate::config::Config;
use crate::models::{Alert, Property, User};
use crate::notify::{HttpGateway, Notifier, TracingSender};
use crate::store::JsonFileStore;

/// The three command handlers over file-backed collections
pub struct AppContext {
    pub add_alert: AddAlert,
    pub add_property: AddProperty,
    pub search_property: SearchProperty,
}

impl AppContext {
    pub fn from_config(config: &Config) -> Result<Self> {
        let properties = Arc::new(JsonFileStore::<Property>::new(&config.properties_file));
        let alerts = Arc::new(JsonFileStore::<Alert>::new(&config.alerts_file));
        let users = Arc::new(JsonFileStore::<User>::new(&config.users_file));

        let audit = if config.audit_log {
            AuditSettings::new(Arc::new(TracingAuditLogger)).with_date(config.audit_log_date)
        } else {
            AuditSettings::disabled()
        };

        let notifier = match &config.notification_gateway_url {
            Some(url) => {
                info!("Delivering notifications through {}", url);
                Notifier::uniform(Arc::new(HttpGateway::new(url.as_str())?))
            }
            None => Notifier::uniform(Arc::new(TracingSender)),
        };

        Ok(Self {
            add_alert: AddAlert::new(alerts.clone(), users.clone(), audit.clone()),
            add_property: AddProperty::new(
                properties.clone(),
                users,
                alerts,
                notifier,
                audit.clone(),
            ),
            search_property: SearchProperty::new(properties, audit),
        })
    }
}
