//! BSON document shapes
//!
//! Documents that carry dates or free-form values are decoded here and
//! converted into the JSON-facing models in `shared`. Aggregated rows made
//! only of strings and numbers decode straight into the shared types.
//!
//! Raw records are read leniently: `null` or missing strings and numbers
//! become empty or zero, and a record that still cannot be decoded (no
//! `date`, a text `callDuration`) is logged and left out of the report.

use mongodb::bson::{self, Bson, Document};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use shared::models::{AgentDetails, AgentFeedback, AgentPerformanceRecord, DistinctValue, Sale};

use super::DbError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    salesperson: String,
    #[serde(default, deserialize_with = "null_as_default")]
    region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    channel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    customer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    product: String,
    #[serde(default, deserialize_with = "null_as_default")]
    amount: f64,
    date: bson::DateTime,
}

impl From<SaleDocument> for Sale {
    fn from(doc: SaleDocument) -> Self {
        Self {
            salesperson: doc.salesperson,
            region: doc.region,
            category: doc.category,
            channel: doc.channel,
            customer: doc.customer,
            product: doc.product,
            amount: doc.amount,
            date: doc.date.to_chrono(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AgentPerformanceDocument {
    agent_id: i64,
    agent_name: String,
    #[serde(default)]
    agent_details: AgentDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    region: String,
    #[serde(default)]
    team: Option<String>,
    date: bson::DateTime,
    #[serde(default, deserialize_with = "null_as_default")]
    call_duration: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    resolution_time: f64,
    #[serde(default)]
    customer_feedback: Bson,
}

impl From<AgentPerformanceDocument> for AgentPerformanceRecord {
    fn from(doc: AgentPerformanceDocument) -> Self {
        Self {
            agent_id: doc.agent_id,
            agent_name: doc.agent_name,
            agent_details: doc.agent_details,
            region: doc.region,
            team: doc.team,
            date: doc.date.to_chrono(),
            call_duration: doc.call_duration,
            resolution_time: doc.resolution_time,
            customer_feedback: doc.customer_feedback.into_relaxed_extjson(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AgentFeedbackDocument {
    agent_name: String,
    #[serde(default)]
    feedback_scores: Vec<Bson>,
}

impl From<AgentFeedbackDocument> for AgentFeedback {
    fn from(doc: AgentFeedbackDocument) -> Self {
        Self {
            agent_name: doc.agent_name,
            feedback_scores: doc
                .feedback_scores
                .into_iter()
                .map(Bson::into_relaxed_extjson)
                .collect(),
        }
    }
}

/// `null` reads as the type's default, like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode raw records, leaving out (and logging) the ones that do not fit
pub(crate) fn decode_records<T: DeserializeOwned>(
    collection: &'static str,
    docs: Vec<Document>,
) -> Vec<T> {
    let total = docs.len();
    let records: Vec<T> = docs
        .into_iter()
        .filter_map(|doc| {
            let id = doc.get("_id").map(ToString::to_string).unwrap_or_default();
            match bson::from_document(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(collection, id = %id, error = %e, "Skipping malformed record");
                    None
                }
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(
            collection,
            skipped = total - records.len(),
            total,
            "Report built without malformed records"
        );
    }
    records
}

/// Decode every document of an aggregation result
pub(crate) fn decode_all<T: DeserializeOwned>(
    collection: &'static str,
    docs: Vec<Document>,
) -> Result<Vec<T>, DbError> {
    docs.into_iter()
        .map(|doc| {
            bson::from_document(doc).map_err(|source| DbError::Decode { collection, source })
        })
        .collect()
}

/// Map a raw `distinct` value; values that are neither text nor integral are dropped
pub(crate) fn distinct_value(value: Bson) -> Option<DistinctValue> {
    match value {
        Bson::String(s) => Some(DistinctValue::Text(s)),
        Bson::Int32(n) => Some(DistinctValue::Number(n.into())),
        Bson::Int64(n) => Some(DistinctValue::Number(n)),
        Bson::Double(f) if f.fract() == 0.0 && f.is_finite() => {
            Some(DistinctValue::Number(f as i64))
        }
        other => {
            tracing::debug!(value = %other, "Skipping non-scalar distinct value");
            None
        }
    }
}
