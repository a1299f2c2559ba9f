//! Report store seam
//!
//! Handlers only see this trait. Each method is one read: one aggregation
//! pipeline or one `distinct` query.

use async_trait::async_trait;
use shared::models::{
    AgentFeedback, AgentPerformanceRecord, CallDurationChart, DistinctField, DistinctValue,
    MetricChart, Sale, SalesByCategory, SalespersonTotal,
};
use shared::{DateRange, MonthRange};

use super::DbResult;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Sorted set of the values of one field
    async fn distinct(&self, field: DistinctField) -> DbResult<Vec<DistinctValue>>;

    async fn sales_by_region(&self, region: &str) -> DbResult<Vec<SalespersonTotal>>;

    async fn sales_by_salesperson(&self, salesperson: &str) -> DbResult<Vec<SalesByCategory>>;

    async fn sales_by_year(&self, year: i32) -> DbResult<Vec<SalespersonTotal>>;

    async fn monthly_sales(&self, range: MonthRange) -> DbResult<Vec<Sale>>;

    async fn agent_performance_by_region(
        &self,
        region: &str,
    ) -> DbResult<Vec<AgentPerformanceRecord>>;

    /// Zero or one chart; empty when no record has the metric
    async fn performance_by_metric(&self, metric_type: &str) -> DbResult<Vec<MetricChart>>;

    async fn customer_feedback(&self, agent_id: i64) -> DbResult<Vec<AgentFeedback>>;

    /// Zero or one chart; empty when no record falls in the range
    async fn call_duration_by_date_range(
        &self,
        range: DateRange,
    ) -> DbResult<Vec<CallDurationChart>>;

    /// Connectivity check for `/health`
    async fn ping(&self) -> DbResult<()>;
}
