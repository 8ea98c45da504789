//! Alert matching and property search over in-memory collections.

pub mod alerts;
pub mod search;

pub use alerts::{matches, notifications_for, plan_notifications};
pub use search::{search, SearchCriteria};
