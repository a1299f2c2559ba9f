//! Report data models
//!
//! Row types returned by the reporting API. Field names are camelCase on
//! the wire so the client can bind them directly.

pub mod agent_performance;
pub mod distinct;
pub mod sales;

pub use agent_performance::{
    AgentDetails, AgentFeedback, AgentPerformanceRecord, CallDurationChart, MetricChart,
    PerformanceMetric, UNKNOWN_AGENT,
};
pub use distinct::{DistinctField, DistinctValue};
pub use sales::{Sale, SalesByCategory, SalespersonTotal};
