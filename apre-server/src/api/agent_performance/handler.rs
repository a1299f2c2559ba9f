//! Agent Performance Report Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::DateRange;
use shared::models::{
    AgentFeedback, AgentPerformanceRecord, CallDurationChart, DistinctField, DistinctValue,
    MetricChart,
};
use shared::query::parse_agent_id;

use crate::api::extract::{ReportPath, ReportQuery};
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// GET /api/reports/agent-performance/region/regions
pub async fn list_regions(State(state): State<ServerState>) -> AppResult<Json<Vec<DistinctValue>>> {
    Ok(Json(state.reports.distinct(DistinctField::AgentRegion).await?))
}

/// GET /api/reports/agent-performance/agent-id
pub async fn list_agent_ids(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DistinctValue>>> {
    Ok(Json(state.reports.distinct(DistinctField::AgentId).await?))
}

/// GET /api/reports/agent-performance/region/{region}
pub async fn by_region(
    State(state): State<ServerState>,
    ReportPath(region): ReportPath<String>,
) -> AppResult<Json<Vec<AgentPerformanceRecord>>> {
    tracing::debug!(region = %region, "Agent performance by region");
    Ok(Json(state.reports.agent_performance_by_region(&region).await?))
}

/// GET /api/reports/agent-performance/performance-by-metric/{metricName}
pub async fn by_metric(
    State(state): State<ServerState>,
    ReportPath(metric_name): ReportPath<String>,
) -> AppResult<Json<Vec<MetricChart>>> {
    tracing::debug!(metric = %metric_name, "Performance by metric");
    Ok(Json(state.reports.performance_by_metric(&metric_name).await?))
}

/// GET /api/reports/agent-performance/agent-performance-by-customer-feedback/{agentId}
///
/// The id is read from its leading digits; with none there is no agent to
/// match and the list is empty.
pub async fn customer_feedback(
    State(state): State<ServerState>,
    ReportPath(agent_id): ReportPath<String>,
) -> AppResult<Json<Vec<AgentFeedback>>> {
    let Some(agent_id) = parse_agent_id(&agent_id) else {
        tracing::debug!(agent_id = %agent_id, "Agent id has no leading digits");
        return Ok(Json(Vec::new()));
    };
    tracing::debug!(agent_id, "Customer feedback by agent");
    Ok(Json(state.reports.customer_feedback(agent_id).await?))
}

/// GET /api/reports/agent-performance/call-duration-by-date-range?startDate=&endDate=
pub async fn call_duration_by_date_range(
    State(state): State<ServerState>,
    ReportQuery(query): ReportQuery<DateRangeQuery>,
) -> AppResult<Json<Vec<CallDurationChart>>> {
    let range = DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?;
    tracing::debug!(start = %range.start, end = %range.end, "Call duration by date range");
    Ok(Json(state.reports.call_duration_by_date_range(range).await?))
}
