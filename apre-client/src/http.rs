//! HTTP client for the reporting API

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared::models::{
    AgentFeedback, AgentPerformanceRecord, CallDurationChart, DistinctValue, MetricChart, Sale,
    SalesByCategory, SalespersonTotal,
};
use shared::routes::{self, agent_performance, sales};
use shared::{DateRange, ErrorBody, MonthRange};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the report endpoints
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    base_url: Url,
}

impl ReportClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `scope` + `path` under the base URL, appending `param` as
    /// one percent-encoded segment
    fn url(&self, scope: &str, path: &str, param: Option<&str>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(scope.split('/').chain(path.split('/')).filter(|s| !s.is_empty()));
            if let Some(param) = param {
                segments.push(param);
            }
        }
        Ok(url)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> ClientResult<T> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => body.message,
                Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_sales<T: DeserializeOwned>(&self, path: &str, param: Option<&str>) -> ClientResult<T> {
        self.get(self.url(routes::SALES, path, param)?, &[]).await
    }

    async fn get_agent<T: DeserializeOwned>(&self, path: &str, param: Option<&str>) -> ClientResult<T> {
        self.get(self.url(routes::AGENT_PERFORMANCE, path, param)?, &[])
            .await
    }

    // ========== Sales API ==========

    pub async fn sales_regions(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::REGIONS, None).await
    }

    pub async fn sales_by_region(&self, region: &str) -> ClientResult<Vec<SalespersonTotal>> {
        self.get_sales(sales::REGIONS, Some(region)).await
    }

    pub async fn salespeople(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::SALESPEOPLE, None).await
    }

    pub async fn sales_by_salesperson(&self, salesperson: &str) -> ClientResult<Vec<SalesByCategory>> {
        self.get_sales(sales::SALESPEOPLE, Some(salesperson)).await
    }

    pub async fn customers(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::CUSTOMERS, None).await
    }

    pub async fn products(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::PRODUCTS, None).await
    }

    pub async fn categories(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::CATEGORIES, None).await
    }

    pub async fn channels(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_sales(sales::CHANNELS, None).await
    }

    pub async fn sales_by_year(&self, year: i32) -> ClientResult<Vec<SalespersonTotal>> {
        let url = self.url(routes::SALES, sales::SALES_BY_YEAR, None)?;
        self.get(url, &[("year", year.to_string())]).await
    }

    /// Sales in one calendar month; an out-of-range month fails before sending
    pub async fn monthly_sales(&self, month: u32, year: i32) -> ClientResult<Vec<Sale>> {
        MonthRange::parse(Some(&month.to_string()), Some(&year.to_string()))?;

        let url = self.url(routes::SALES, sales::MONTHLY, None)?;
        self.get(url, &[("month", month.to_string()), ("year", year.to_string())])
            .await
    }

    // ========== Agent Performance API ==========

    pub async fn agent_regions(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_agent(agent_performance::REGIONS, None).await
    }

    pub async fn agent_performance_by_region(
        &self,
        region: &str,
    ) -> ClientResult<Vec<AgentPerformanceRecord>> {
        self.get_agent(agent_performance::REGION, Some(region)).await
    }

    pub async fn performance_by_metric(&self, metric_type: &str) -> ClientResult<Vec<MetricChart>> {
        self.get_agent(agent_performance::PERFORMANCE_BY_METRIC, Some(metric_type))
            .await
    }

    pub async fn agent_ids(&self) -> ClientResult<Vec<DistinctValue>> {
        self.get_agent(agent_performance::AGENT_IDS, None).await
    }

    pub async fn customer_feedback(&self, agent_id: i64) -> ClientResult<Vec<AgentFeedback>> {
        let agent_id = agent_id.to_string();
        self.get_agent(agent_performance::CUSTOMER_FEEDBACK, Some(&agent_id))
            .await
    }

    /// Total call duration per agent; dates are `YYYY-MM-DD` or RFC 3339
    pub async fn call_duration_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ClientResult<Vec<CallDurationChart>> {
        DateRange::parse(Some(start_date), Some(end_date))?;

        let url = self.url(
            routes::AGENT_PERFORMANCE,
            agent_performance::CALL_DURATION_BY_DATE_RANGE,
            None,
        )?;
        self.get(
            url,
            &[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ],
        )
        .await
    }
}
