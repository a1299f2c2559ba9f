//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`sales`] - 销售报表 (`/api/reports/sales`)
//! - [`agent_performance`] - 客服绩效报表 (`/api/reports/agent-performance`)
//!
//! 未匹配的路由和错误的请求方法统一返回 404 错误体。

pub mod agent_performance;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod sales;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// The served application: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Build the Axum router with state and middleware applied
///
/// `/api/reports/sales/regions/` is served as `/api/reports/sales/regions`.
/// Trimming must run before routing, so it wraps the router.
pub fn build_app(state: ServerState) -> App {
    let cors = cors_layer(&state.config);
    let timeout = state.config.request_timeout();

    let router = Router::<ServerState>::new()
        .merge(health::router())
        .merge(sales::router())
        .merge(agent_performance::router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(axum::middleware::map_response(timeout_body))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// The timeout layer answers with an empty 408; give it the error body
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn cors_layer(config: &Config) -> CorsLayer {
    let Some(origin) = config.cors_origin.as_deref() else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            tracing::warn!(origin = %origin, error = %e, "Invalid CORS_ORIGIN, allowing any origin");
            CorsLayer::permissive()
        }
    }
}
