//! Agent performance report pipelines (`agentPerformance` collection)
//!
//! Every report joins `agents` on `agentId`. A record without a matching
//! agent is kept and reported under the name `"Unknown"`.

use mongodb::bson::doc;
use shared::DateRange;

use super::{Pipeline, agent_name_or_unknown, bson_date, lookup_agent};

/// Records of one region with the joined agent, internal fields removed
pub fn by_region(region: &str) -> Pipeline {
    vec![
        doc! { "$match": { "region": region } },
        lookup_agent(),
        doc! {
            "$addFields": {
                "agentDetails": {
                    "$ifNull": [{ "$arrayElemAt": ["$agentDetails", 0] }, {}]
                }
            }
        },
        doc! {
            "$addFields": {
                "agentName": { "$ifNull": ["$agentDetails.name", shared::models::UNKNOWN_AGENT] }
            }
        },
        doc! { "$unset": ["_id", "performanceMetrics", "supervisorId", "agentDetails._id"] },
    ]
}

/// Per-agent totals of one metric type, as two parallel arrays
///
/// Yields no document when nothing matches.
pub fn by_metric(metric_type: &str) -> Pipeline {
    vec![
        doc! { "$match": { "performanceMetrics": { "$elemMatch": { "metricType": metric_type } } } },
        lookup_agent(),
        agent_name_or_unknown(),
        doc! {
            "$project": {
                "_id": 0,
                "agentName": 1,
                "metricTotal": {
                    "$sum": {
                        "$map": {
                            "input": {
                                "$filter": {
                                    "input": "$performanceMetrics",
                                    "as": "metric",
                                    "cond": { "$eq": ["$$metric.metricType", metric_type] },
                                }
                            },
                            "as": "metric",
                            "in": "$$metric.value",
                        }
                    }
                },
            }
        },
        doc! { "$group": { "_id": "$agentName", "total": { "$sum": "$metricTotal" } } },
        doc! { "$sort": { "_id": 1 } },
        doc! {
            "$group": {
                "_id": null,
                "agentNames": { "$push": "$_id" },
                "performanceTotals": { "$push": "$total" },
            }
        },
        doc! { "$project": { "_id": 0, "agentNames": 1, "performanceTotals": 1 } },
    ]
}

/// All customer feedback of one agent collected into a single array
pub fn customer_feedback(agent_id: i64) -> Pipeline {
    vec![
        doc! { "$match": { "agentId": agent_id } },
        lookup_agent(),
        agent_name_or_unknown(),
        doc! {
            "$group": {
                "_id": "$agentId",
                "agentName": { "$first": "$agentName" },
                "feedbackScores": { "$push": "$customerFeedback" },
            }
        },
        doc! { "$project": { "_id": 0, "agentName": 1, "feedbackScores": 1 } },
    ]
}

/// Call duration summed per agent over an inclusive date range
pub fn call_duration(range: &DateRange) -> Pipeline {
    vec![
        doc! {
            "$match": {
                "date": { "$gte": bson_date(range.start), "$lte": bson_date(range.end) }
            }
        },
        lookup_agent(),
        agent_name_or_unknown(),
        doc! {
            "$group": { "_id": "$agentName", "totalCallDuration": { "$sum": "$callDuration" } }
        },
        doc! { "$sort": { "_id": 1 } },
        doc! {
            "$group": {
                "_id": null,
                "agents": { "$push": "$_id" },
                "callDurations": { "$push": "$totalCallDuration" },
            }
        },
        doc! { "$project": { "_id": 0, "agents": 1, "callDurations": 1 } },
    ]
}
