//! Distinct value lists (form dropdowns)

use serde::{Deserialize, Serialize};

/// Collections the reports read
pub mod collections {
    pub const SALES: &str = "sales";
    pub const AGENT_PERFORMANCE: &str = "agentPerformance";
    pub const AGENTS: &str = "agents";
}

/// Fields that have a distinct-values endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistinctField {
    SalesRegion,
    Salesperson,
    Customer,
    Product,
    Category,
    Channel,
    AgentRegion,
    AgentId,
}

impl DistinctField {
    /// Collection holding the field
    pub fn collection(self) -> &'static str {
        match self {
            Self::SalesRegion
            | Self::Salesperson
            | Self::Customer
            | Self::Product
            | Self::Category
            | Self::Channel => collections::SALES,
            Self::AgentRegion | Self::AgentId => collections::AGENT_PERFORMANCE,
        }
    }

    /// Document field name
    pub fn field(self) -> &'static str {
        match self {
            Self::SalesRegion | Self::AgentRegion => "region",
            Self::Salesperson => "salesperson",
            Self::Customer => "customer",
            Self::Product => "product",
            Self::Category => "category",
            Self::Channel => "channel",
            Self::AgentId => "agentId",
        }
    }
}

/// One distinct value: agent ids are numbers, everything else is text
///
/// Ordering puts numbers before text, each in natural order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistinctValue {
    Number(i64),
    Text(String),
}

impl From<&str> for DistinctValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for DistinctValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Sort and de-duplicate so the list is a set
pub fn normalize(mut values: Vec<DistinctValue>) -> Vec<DistinctValue> {
    values.sort();
    values.dedup();
    values
}
