// apre-server/tests/common/mod.rs
// 集成测试共用：内存报表存储 + 测试 App

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use apre_server::db::DbResult;
use apre_server::{App, Config, DbError, ReportStore, ServerState, build_app};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::{
    AgentDetails, AgentFeedback, AgentPerformanceRecord, CallDurationChart, DistinctField,
    DistinctValue, MetricChart, PerformanceMetric, Sale, SalesByCategory, SalespersonTotal,
    UNKNOWN_AGENT, distinct,
};
use shared::query::utc_year;
use shared::{DateRange, MonthRange};
use tower::ServiceExt;

/// Raw `agentPerformance` row before the agent join
#[derive(Debug, Clone)]
pub struct PerformanceRow {
    pub agent_id: i64,
    pub region: String,
    pub date: DateTime<Utc>,
    pub call_duration: f64,
    pub resolution_time: f64,
    pub customer_feedback: Value,
    pub metrics: Vec<PerformanceMetric>,
}

/// In-memory `ReportStore` with the same grouping and ordering as the
/// aggregation pipelines
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    pub sales: Vec<Sale>,
    pub agents: HashMap<i64, String>,
    pub performance: Vec<PerformanceRow>,
}

impl MemoryReportStore {
    fn agent_name(&self, agent_id: i64) -> String {
        self.agents
            .get(&agent_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AGENT.to_string())
    }

    fn totals_by_salesperson<'a>(sales: impl Iterator<Item = &'a Sale>) -> Vec<SalespersonTotal> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for sale in sales {
            *totals.entry(sale.salesperson.as_str()).or_default() += sale.amount;
        }
        totals
            .into_iter()
            .map(|(salesperson, total_sales)| SalespersonTotal {
                salesperson: salesperson.to_string(),
                total_sales,
            })
            .collect()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn distinct(&self, field: DistinctField) -> DbResult<Vec<DistinctValue>> {
        let values = match field {
            DistinctField::SalesRegion => self.sales.iter().map(|s| s.region.as_str().into()).collect(),
            DistinctField::Salesperson => {
                self.sales.iter().map(|s| s.salesperson.as_str().into()).collect()
            }
            DistinctField::Customer => self.sales.iter().map(|s| s.customer.as_str().into()).collect(),
            DistinctField::Product => self.sales.iter().map(|s| s.product.as_str().into()).collect(),
            DistinctField::Category => self.sales.iter().map(|s| s.category.as_str().into()).collect(),
            DistinctField::Channel => self.sales.iter().map(|s| s.channel.as_str().into()).collect(),
            DistinctField::AgentRegion => self
                .performance
                .iter()
                .map(|r| r.region.as_str().into())
                .collect(),
            DistinctField::AgentId => self.performance.iter().map(|r| r.agent_id.into()).collect(),
        };
        Ok(distinct::normalize(values))
    }

    async fn sales_by_region(&self, region: &str) -> DbResult<Vec<SalespersonTotal>> {
        Ok(Self::totals_by_salesperson(
            self.sales.iter().filter(|s| s.region == region),
        ))
    }

    async fn sales_by_salesperson(&self, salesperson: &str) -> DbResult<Vec<SalesByCategory>> {
        let mut groups: BTreeMap<(&str, &str, &str), (i64, f64)> = BTreeMap::new();
        for sale in self.sales.iter().filter(|s| s.salesperson == salesperson) {
            let entry = groups
                .entry((sale.category.as_str(), sale.channel.as_str(), sale.region.as_str()))
                .or_default();
            entry.0 += 1;
            entry.1 += sale.amount;
        }
        Ok(groups
            .into_iter()
            .map(|((category, channel, region), (sales_count, total_amount))| SalesByCategory {
                category: category.to_string(),
                channel: channel.to_string(),
                region: region.to_string(),
                sales_count,
                total_amount,
            })
            .collect())
    }

    async fn sales_by_year(&self, year: i32) -> DbResult<Vec<SalespersonTotal>> {
        Ok(Self::totals_by_salesperson(
            self.sales.iter().filter(|s| utc_year(&s.date) == year),
        ))
    }

    async fn monthly_sales(&self, range: MonthRange) -> DbResult<Vec<Sale>> {
        let mut sales: Vec<Sale> = self
            .sales
            .iter()
            .filter(|s| range.contains(&s.date))
            .cloned()
            .collect();
        sales.sort_by_key(|s| s.date);
        Ok(sales)
    }

    async fn agent_performance_by_region(
        &self,
        region: &str,
    ) -> DbResult<Vec<AgentPerformanceRecord>> {
        Ok(self
            .performance
            .iter()
            .filter(|r| r.region == region)
            .map(|r| {
                let agent_details = match self.agents.get(&r.agent_id) {
                    Some(name) => AgentDetails {
                        agent_id: Some(r.agent_id),
                        name: Some(name.clone()),
                    },
                    None => AgentDetails::default(),
                };
                AgentPerformanceRecord {
                    agent_id: r.agent_id,
                    agent_name: self.agent_name(r.agent_id),
                    agent_details,
                    region: r.region.clone(),
                    team: None,
                    date: r.date,
                    call_duration: r.call_duration,
                    resolution_time: r.resolution_time,
                    customer_feedback: r.customer_feedback.clone(),
                }
            })
            .collect())
    }

    async fn performance_by_metric(&self, metric_type: &str) -> DbResult<Vec<MetricChart>> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for row in &self.performance {
            let matching: Vec<f64> = row
                .metrics
                .iter()
                .filter(|m| m.metric_type == metric_type)
                .map(|m| m.value)
                .collect();
            if matching.is_empty() {
                continue;
            }
            *totals.entry(self.agent_name(row.agent_id)).or_default() += matching.iter().sum::<f64>();
        }
        if totals.is_empty() {
            return Ok(Vec::new());
        }
        let (agent_names, performance_totals) = totals.into_iter().unzip();
        Ok(vec![MetricChart {
            agent_names,
            performance_totals,
        }])
    }

    async fn customer_feedback(&self, agent_id: i64) -> DbResult<Vec<AgentFeedback>> {
        let feedback_scores: Vec<Value> = self
            .performance
            .iter()
            .filter(|r| r.agent_id == agent_id)
            .map(|r| r.customer_feedback.clone())
            .collect();
        if feedback_scores.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![AgentFeedback {
            agent_name: self.agent_name(agent_id),
            feedback_scores,
        }])
    }

    async fn call_duration_by_date_range(
        &self,
        range: DateRange,
    ) -> DbResult<Vec<CallDurationChart>> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for row in self.performance.iter().filter(|r| range.contains(&r.date)) {
            *totals.entry(self.agent_name(row.agent_id)).or_default() += row.call_duration;
        }
        if totals.is_empty() {
            return Ok(Vec::new());
        }
        let (agents, call_durations) = totals.into_iter().unzip();
        Ok(vec![CallDurationChart {
            agents,
            call_durations,
        }])
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}

/// Every query fails like an unreachable database
#[derive(Debug, Default)]
pub struct FailingStore;

fn unreachable_db() -> DbError {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    DbError::Mongo(io.into())
}

#[async_trait]
impl ReportStore for FailingStore {
    async fn distinct(&self, _field: DistinctField) -> DbResult<Vec<DistinctValue>> {
        Err(unreachable_db())
    }

    async fn sales_by_region(&self, _region: &str) -> DbResult<Vec<SalespersonTotal>> {
        Err(unreachable_db())
    }

    async fn sales_by_salesperson(&self, _salesperson: &str) -> DbResult<Vec<SalesByCategory>> {
        Err(unreachable_db())
    }

    async fn sales_by_year(&self, _year: i32) -> DbResult<Vec<SalespersonTotal>> {
        Err(unreachable_db())
    }

    async fn monthly_sales(&self, _range: MonthRange) -> DbResult<Vec<Sale>> {
        Err(unreachable_db())
    }

    async fn agent_performance_by_region(
        &self,
        _region: &str,
    ) -> DbResult<Vec<AgentPerformanceRecord>> {
        Err(unreachable_db())
    }

    async fn performance_by_metric(&self, _metric_type: &str) -> DbResult<Vec<MetricChart>> {
        Err(unreachable_db())
    }

    async fn customer_feedback(&self, _agent_id: i64) -> DbResult<Vec<AgentFeedback>> {
        Err(unreachable_db())
    }

    async fn call_duration_by_date_range(
        &self,
        _range: DateRange,
    ) -> DbResult<Vec<CallDurationChart>> {
        Err(unreachable_db())
    }

    async fn ping(&self) -> DbResult<()> {
        Err(unreachable_db())
    }
}

/// Distinct lookups outlive any request timeout; everything else is seeded
#[derive(Debug)]
pub struct SlowStore {
    pub delay: std::time::Duration,
    pub inner: MemoryReportStore,
}

#[async_trait]
impl ReportStore for SlowStore {
    async fn distinct(&self, field: DistinctField) -> DbResult<Vec<DistinctValue>> {
        tokio::time::sleep(self.delay).await;
        self.inner.distinct(field).await
    }

    async fn sales_by_region(&self, region: &str) -> DbResult<Vec<SalespersonTotal>> {
        self.inner.sales_by_region(region).await
    }

    async fn sales_by_salesperson(&self, salesperson: &str) -> DbResult<Vec<SalesByCategory>> {
        self.inner.sales_by_salesperson(salesperson).await
    }

    async fn sales_by_year(&self, year: i32) -> DbResult<Vec<SalespersonTotal>> {
        self.inner.sales_by_year(year).await
    }

    async fn monthly_sales(&self, range: MonthRange) -> DbResult<Vec<Sale>> {
        self.inner.monthly_sales(range).await
    }

    async fn agent_performance_by_region(
        &self,
        region: &str,
    ) -> DbResult<Vec<AgentPerformanceRecord>> {
        self.inner.agent_performance_by_region(region).await
    }

    async fn performance_by_metric(&self, metric_type: &str) -> DbResult<Vec<MetricChart>> {
        self.inner.performance_by_metric(metric_type).await
    }

    async fn customer_feedback(&self, agent_id: i64) -> DbResult<Vec<AgentFeedback>> {
        self.inner.customer_feedback(agent_id).await
    }

    async fn call_duration_by_date_range(
        &self,
        range: DateRange,
    ) -> DbResult<Vec<CallDurationChart>> {
        self.inner.call_duration_by_date_range(range).await
    }

    async fn ping(&self) -> DbResult<()> {
        self.inner.ping().await
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn sale(salesperson: &str, region: &str, category: &str, channel: &str, amount: f64, date: DateTime<Utc>) -> Sale {
    Sale {
        salesperson: salesperson.to_string(),
        region: region.to_string(),
        category: category.to_string(),
        channel: channel.to_string(),
        customer: format!("{salesperson} Customer"),
        product: format!("{category} Product"),
        amount,
        date,
    }
}

fn metric(metric_type: &str, value: f64) -> PerformanceMetric {
    PerformanceMetric {
        metric_type: metric_type.to_string(),
        value,
    }
}

pub fn seeded_store() -> MemoryReportStore {
    let sales = vec![
        sale("John Doe", "North", "Electronics", "Online", 100.0, utc(2023, 1, 15)),
        sale("John Doe", "North", "Electronics", "Online", 200.0, utc(2023, 2, 10)),
        sale("Jane Smith", "North", "Furniture", "Retail", 500.0, utc(2023, 2, 20)),
        sale("John Doe", "South", "Clothing", "Retail", 50.0, utc(2024, 3, 1)),
        sale("Alice Brown", "South", "Electronics", "Online", 75.0, utc(2024, 3, 31)),
        sale("Alice Brown", "South", "Electronics", "Online", 25.0, utc(2024, 4, 1)),
    ];

    let agents = HashMap::from([
        (1000, "Jon Anderson".to_string()),
        (1001, "Rindy Ross".to_string()),
    ]);

    let performance = vec![
        PerformanceRow {
            agent_id: 1000,
            region: "Europe".into(),
            date: utc(2024, 1, 10),
            call_duration: 30.0,
            resolution_time: 12.0,
            customer_feedback: json!("Positive"),
            metrics: vec![metric("Sales Conversion", 80.0), metric("Customer Satisfaction", 90.0)],
        },
        PerformanceRow {
            agent_id: 1001,
            region: "Asia".into(),
            date: utc(2024, 1, 20),
            call_duration: 45.0,
            resolution_time: 20.0,
            customer_feedback: json!("Neutral"),
            metrics: vec![metric("Sales Conversion", 100.0)],
        },
        PerformanceRow {
            agent_id: 1000,
            region: "Europe".into(),
            date: utc(2024, 2, 5),
            call_duration: 25.0,
            resolution_time: 10.0,
            customer_feedback: json!("Negative"),
            metrics: vec![metric("Sales Conversion", 20.0)],
        },
        // Agent with no `agents` entry
        PerformanceRow {
            agent_id: 1007,
            region: "Europe".into(),
            date: utc(2024, 1, 25),
            call_duration: 60.0,
            resolution_time: 30.0,
            customer_feedback: json!("Positive"),
            metrics: vec![metric("Customer Satisfaction", 70.0)],
        },
    ];

    MemoryReportStore {
        sales,
        agents,
        performance,
    }
}

// ============================================================================
// App helpers
// ============================================================================

pub fn app_with(store: impl ReportStore + 'static) -> App {
    app_with_config(Config::default(), store)
}

pub fn app_with_config(config: Config, store: impl ReportStore + 'static) -> App {
    let state = ServerState::new(config, Arc::new(store));
    build_app(state)
}

pub fn seeded_app() -> App {
    app_with(seeded_store())
}

/// Send `request` and decode the JSON body (`null` if the body is not JSON)
pub async fn send(app: App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// GET `uri` and decode the JSON body
pub async fn get_json(app: App, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub fn error_body(status: u16, message: &str) -> Value {
    json!({ "message": message, "status": status, "type": "error" })
}
