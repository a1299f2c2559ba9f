//! Agent performance report API 模块

mod handler;

use axum::{Router, routing::get};
use shared::routes::{self, agent_performance as paths};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        &format!("{}{}", routes::API_PREFIX, routes::AGENT_PERFORMANCE),
        routes(),
    )
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(paths::REGIONS, get(handler::list_regions))
        .route(&format!("{}/{{region}}", paths::REGION), get(handler::by_region))
        .route(
            &format!("{}/{{metric_name}}", paths::PERFORMANCE_BY_METRIC),
            get(handler::by_metric),
        )
        .route(paths::AGENT_IDS, get(handler::list_agent_ids))
        .route(
            &format!("{}/{{agent_id}}", paths::CUSTOMER_FEEDBACK),
            get(handler::customer_feedback),
        )
        .route(
            paths::CALL_DURATION_BY_DATE_RANGE,
            get(handler::call_duration_by_date_range),
        )
}
