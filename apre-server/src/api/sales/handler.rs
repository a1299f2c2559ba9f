//! Sales Report Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::MonthRange;
use shared::models::{DistinctField, DistinctValue, Sale, SalesByCategory, SalespersonTotal};
use shared::query::parse_year;

use crate::api::extract::{ReportPath, ReportQuery};
use crate::core::ServerState;
use crate::utils::AppResult;

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

// ============================================================================
// Distinct lists
// ============================================================================

async fn distinct(state: &ServerState, field: DistinctField) -> AppResult<Json<Vec<DistinctValue>>> {
    Ok(Json(state.reports.distinct(field).await?))
}

/// GET /api/reports/sales/regions
pub async fn list_regions(State(state): State<ServerState>) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::SalesRegion).await
}

/// GET /api/reports/sales/salespeople
pub async fn list_salespeople(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::Salesperson).await
}

/// GET /api/reports/sales/customers
pub async fn list_customers(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::Customer).await
}

/// GET /api/reports/sales/products
pub async fn list_products(State(state): State<ServerState>) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::Product).await
}

/// GET /api/reports/sales/categories
pub async fn list_categories(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::Category).await
}

/// GET /api/reports/sales/channels
pub async fn list_channels(State(state): State<ServerState>) -> AppResult<Json<Vec<DistinctValue>>> {
    distinct(&state, DistinctField::Channel).await
}

// ============================================================================
// Reports
// ============================================================================

/// GET /api/reports/sales/regions/{region}
pub async fn by_region(
    State(state): State<ServerState>,
    ReportPath(region): ReportPath<String>,
) -> AppResult<Json<Vec<SalespersonTotal>>> {
    tracing::debug!(region = %region, "Sales by region");
    Ok(Json(state.reports.sales_by_region(&region).await?))
}

/// GET /api/reports/sales/salespeople/{personName}
pub async fn by_salesperson(
    State(state): State<ServerState>,
    ReportPath(person_name): ReportPath<String>,
) -> AppResult<Json<Vec<SalesByCategory>>> {
    tracing::debug!(salesperson = %person_name, "Sales by salesperson");
    Ok(Json(state.reports.sales_by_salesperson(&person_name).await?))
}

/// GET /api/reports/sales/sales-by-year?year=2023
pub async fn by_year(
    State(state): State<ServerState>,
    ReportQuery(query): ReportQuery<YearQuery>,
) -> AppResult<Json<Vec<SalespersonTotal>>> {
    let year = parse_year(query.year.as_deref())?;
    tracing::debug!(year, "Sales by year");
    Ok(Json(state.reports.sales_by_year(year).await?))
}

/// GET /api/reports/sales/monthly?month=3&year=2024
pub async fn monthly(
    State(state): State<ServerState>,
    ReportQuery(query): ReportQuery<MonthlyQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let range = MonthRange::parse(query.month.as_deref(), query.year.as_deref())?;
    tracing::debug!(start = %range.start, end = %range.end, "Monthly sales");
    Ok(Json(state.reports.monthly_sales(range).await?))
}
