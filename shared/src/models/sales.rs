//! Sales Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted sale (`sales` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub salesperson: String,
    pub region: String,
    pub category: String,
    pub channel: String,
    pub customer: String,
    pub product: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Total sales of one salesperson (region and year reports)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonTotal {
    pub salesperson: String,
    pub total_sales: f64,
}

/// Sales of one salesperson grouped by category, channel and region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByCategory {
    pub category: String,
    pub channel: String,
    pub region: String,
    pub sales_count: i64,
    pub total_amount: f64,
}
