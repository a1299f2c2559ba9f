//! APRE Client - HTTP client for the reporting API
//!
//! Typed calls for every report endpoint plus the table view model used to
//! display report rows (labels, sorting, pagination).

pub mod config;
pub mod error;
pub mod http;
pub mod table;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ReportClient;
pub use table::{Page, SortDirection, Table};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{DateRange, ErrorBody, MonthRange, QueryError};
