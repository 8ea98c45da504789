//! Property listings with alert matching.
//!
//! Users register alerts (postal code, optional price/room/area bounds, a
//! channel). Each new listing is matched against every alert, and each
//! match is delivered by email, SMS or push. Search filters listings by
//! the same criteria.

pub mod audit;
pub mod commands;
pub mod config;
pub mod context;
pub mod filters;
pub mod matching;
pub mod models;
pub mod notify;
pub mod store;
pub mod validation;

mod error;

pub use config::Config;
pub use context::AppContext;
pub use error::{AppError, AppResult, StoreError, ValidationError};
