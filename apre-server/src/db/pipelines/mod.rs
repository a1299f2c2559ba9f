//! Aggregation pipeline builders
//!
//! Pure functions from report parameters to BSON stages. Execution lives in
//! [`crate::db::MongoReportStore`]; keeping the builders separate lets the
//! stage layout be unit tested without a database.

pub mod agent_performance;
pub mod sales;

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use shared::models::UNKNOWN_AGENT;
use shared::models::distinct::collections;

/// A pipeline is an ordered list of stages
pub type Pipeline = Vec<Document>;

/// `$lookup` of the agent document into `agentDetails` (an array)
pub(crate) fn lookup_agent() -> Document {
    doc! {
        "$lookup": {
            "from": collections::AGENTS,
            "localField": "agentId",
            "foreignField": "agentId",
            "as": "agentDetails",
        }
    }
}

/// Adds `agentName` from the first joined agent, or `"Unknown"`
pub(crate) fn agent_name_or_unknown() -> Document {
    doc! {
        "$addFields": {
            "agentName": {
                "$ifNull": [{ "$arrayElemAt": ["$agentDetails.name", 0] }, UNKNOWN_AGENT]
            }
        }
    }
}

pub(crate) fn bson_date(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_chrono(at)
}

/// First-level operator names of a pipeline, for assertions
#[cfg(test)]
pub(crate) fn stage_names(pipeline: &[Document]) -> Vec<&str> {
    pipeline
        .iter()
        .filter_map(|stage| stage.keys().next().map(String::as_str))
        .collect()
}
