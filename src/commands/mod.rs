//! Command Handlers module
//!
//! Each handler validates its command, loads the collections it needs,
//! computes, writes back, and records an audit entry.

mod add_alert;
mod add_property;
mod search_property;
mod types;

pub use add_alert::AddAlert;
pub use add_property::AddProperty;
pub use search_property::SearchProperty;
pub use types::*;
