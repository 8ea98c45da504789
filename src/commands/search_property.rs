//! Property Search Handler

use std::sync::Arc;
use tracing::debug;

use crate::audit::AuditSettings;
use crate::error::AppResult;
use crate::matching;
use crate::models::Property;
use crate::store::CollectionSource;
use crate::validation;

use super::SearchQuery;

pub struct SearchProperty {
    properties: Arc<dyn CollectionSource<Property>>,
    audit: AuditSettings,
}

impl SearchProperty {
    pub fn new(properties: Arc<dyn CollectionSource<Property>>, audit: AuditSettings) -> Self {
        Self { properties, audit }
    }

    pub async fn search(&self, query: SearchQuery) -> AppResult<Vec<Property>> {
        let criteria = validation::validate_search(&query)?;

        let properties = self.properties.load_all().await;
        let found = matching::search(&criteria, &properties);

        debug!(
            "Search at {} matched {} of {} properties",
            criteria.postal_code,
            found.len(),
            properties.len()
        );

        self.audit.record(query.audit_fields());

        Ok(found)
    }
}
