//! MongoDB Report Store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use serde::de::DeserializeOwned;
use shared::models::distinct::{collections, normalize};
use shared::models::{
    AgentFeedback, AgentPerformanceRecord, CallDurationChart, DistinctField, DistinctValue,
    MetricChart, Sale, SalesByCategory, SalespersonTotal,
};
use shared::{DateRange, MonthRange};

use super::documents::{
    AgentFeedbackDocument, AgentPerformanceDocument, SaleDocument, decode_all, decode_records,
    distinct_value,
};
use super::pipelines::{self, Pipeline};
use super::{DbResult, MongoService, ReportStore};

/// `ReportStore` that runs one pipeline per report
#[derive(Clone, Debug)]
pub struct MongoReportStore {
    mongo: MongoService,
}

impl MongoReportStore {
    pub fn new(mongo: MongoService) -> Self {
        Self { mongo }
    }

    async fn aggregate(&self, collection: &'static str, pipeline: Pipeline) -> DbResult<Vec<Document>> {
        tracing::debug!(collection, stages = pipeline.len(), "Running aggregation");
        let cursor = self
            .mongo
            .database()
            .collection::<Document>(collection)
            .aggregate(pipeline)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn aggregate_into<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        pipeline: Pipeline,
    ) -> DbResult<Vec<T>> {
        let docs = self.aggregate(collection, pipeline).await?;
        decode_all(collection, docs)
    }

    /// Like `aggregate_into`, for reports that return raw records
    async fn aggregate_records<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        pipeline: Pipeline,
    ) -> DbResult<Vec<T>> {
        let docs = self.aggregate(collection, pipeline).await?;
        Ok(decode_records(collection, docs))
    }
}

#[async_trait]
impl ReportStore for MongoReportStore {
    async fn distinct(&self, field: DistinctField) -> DbResult<Vec<DistinctValue>> {
        let raw = self
            .mongo
            .database()
            .collection::<Document>(field.collection())
            .distinct(field.field(), doc! {})
            .await?;
        Ok(normalize(raw.into_iter().filter_map(distinct_value).collect()))
    }

    async fn sales_by_region(&self, region: &str) -> DbResult<Vec<SalespersonTotal>> {
        self.aggregate_into(collections::SALES, pipelines::sales::by_region(region))
            .await
    }

    async fn sales_by_salesperson(&self, salesperson: &str) -> DbResult<Vec<SalesByCategory>> {
        self.aggregate_into(collections::SALES, pipelines::sales::by_salesperson(salesperson))
            .await
    }

    async fn sales_by_year(&self, year: i32) -> DbResult<Vec<SalespersonTotal>> {
        self.aggregate_into(collections::SALES, pipelines::sales::by_year(year))
            .await
    }

    async fn monthly_sales(&self, range: MonthRange) -> DbResult<Vec<Sale>> {
        let docs: Vec<SaleDocument> = self
            .aggregate_records(collections::SALES, pipelines::sales::monthly(&range))
            .await?;
        Ok(docs.into_iter().map(Sale::from).collect())
    }

    async fn agent_performance_by_region(
        &self,
        region: &str,
    ) -> DbResult<Vec<AgentPerformanceRecord>> {
        let docs: Vec<AgentPerformanceDocument> = self
            .aggregate_records(
                collections::AGENT_PERFORMANCE,
                pipelines::agent_performance::by_region(region),
            )
            .await?;
        Ok(docs.into_iter().map(AgentPerformanceRecord::from).collect())
    }

    async fn performance_by_metric(&self, metric_type: &str) -> DbResult<Vec<MetricChart>> {
        self.aggregate_into(
            collections::AGENT_PERFORMANCE,
            pipelines::agent_performance::by_metric(metric_type),
        )
        .await
    }

    async fn customer_feedback(&self, agent_id: i64) -> DbResult<Vec<AgentFeedback>> {
        let docs: Vec<AgentFeedbackDocument> = self
            .aggregate_into(
                collections::AGENT_PERFORMANCE,
                pipelines::agent_performance::customer_feedback(agent_id),
            )
            .await?;
        Ok(docs.into_iter().map(AgentFeedback::from).collect())
    }

    async fn call_duration_by_date_range(
        &self,
        range: DateRange,
    ) -> DbResult<Vec<CallDurationChart>> {
        self.aggregate_into(
            collections::AGENT_PERFORMANCE,
            pipelines::agent_performance::call_duration(&range),
        )
        .await
    }

    async fn ping(&self) -> DbResult<()> {
        self.mongo.ping().await
    }
}
