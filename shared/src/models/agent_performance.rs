//! Agent Performance Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name reported for performance records whose agent is not in `agents`
pub const UNKNOWN_AGENT: &str = "Unknown";

/// One `{metricType, value}` entry of a performance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub metric_type: String,
    pub value: f64,
}

/// Joined agent document; empty when the lookup found nothing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Agent performance record of the region report
///
/// `_id`, `performanceMetrics` and `supervisorId` are never exposed.
/// `customerFeedback` is kept as whatever the collection stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceRecord {
    pub agent_id: i64,
    pub agent_name: String,
    #[serde(default)]
    pub agent_details: AgentDetails,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub call_duration: f64,
    #[serde(default)]
    pub resolution_time: f64,
    #[serde(default)]
    pub customer_feedback: Value,
}

/// Parallel arrays for the performance-by-metric chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChart {
    pub agent_names: Vec<String>,
    pub performance_totals: Vec<f64>,
}

/// All feedback values recorded for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFeedback {
    pub agent_name: String,
    pub feedback_scores: Vec<Value>,
}

/// Parallel arrays for the call-duration chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDurationChart {
    pub agents: Vec<String>,
    pub call_durations: Vec<f64>,
}

impl MetricChart {
    /// Pairs each agent name with its total
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.agent_names
            .iter()
            .map(String::as_str)
            .zip(self.performance_totals.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_agent_details_default_to_empty() {
        let record: AgentPerformanceRecord = serde_json::from_value(serde_json::json!({
            "agentId": 1007,
            "agentName": "Unknown",
            "region": "Europe",
            "date": "2024-01-15T00:00:00Z",
            "callDuration": 30,
            "resolutionTime": 12,
            "customerFeedback": "Positive"
        }))
        .unwrap();
        assert_eq!(record.agent_details, AgentDetails::default());
        assert_eq!(record.agent_name, UNKNOWN_AGENT);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["agentDetails"], serde_json::json!({}));
        assert!(json.get("performanceMetrics").is_none());
        assert!(json.get("supervisorId").is_none());
    }

    #[test]
    fn metric_chart_points_zip_arrays() {
        let chart = MetricChart {
            agent_names: vec!["Jon Anderson".into(), "Rindy Ross".into()],
            performance_totals: vec![80.0, 100.0],
        };
        let points: Vec<_> = chart.points().collect();
        assert_eq!(points, vec![("Jon Anderson", 80.0), ("Rindy Ross", 100.0)]);
    }
}
