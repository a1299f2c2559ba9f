//! Shared types for the APRE reporting service
//!
//! Used by both `apre-server` and `apre-client`: report row models, the
//! error wire format, route paths and parameter validation.

pub mod error;
pub mod models;
pub mod query;
pub mod routes;

// Re-exports
pub use error::ErrorBody;
pub use query::{DateRange, MonthRange, QueryError};
pub use serde::{Deserialize, Serialize};
