//! 统一错误处理
//!
//! Every failure leaves the service as the same `{message, status, type}`
//! body (see [`shared::ErrorBody`]).
//!
//! | 分类 | Status | Wire message |
//! |------|--------|--------------|
//! | 缺少/无效参数 | 400 | validation message |
//! | 路由不存在 | 404 | `Not Found` |
//! | 请求超时 | 408 | `Request Timeout` |
//! | 数据库错误 | 500 | `Internal Server Error` |
//! | 内部错误 | 500 | `Internal Server Error` |
//!
//! # 使用示例
//!
//! ```ignore
//! let year = shared::query::parse_year(query.year.as_deref())?;
//! Ok(Json(state.reports.sales_by_year(year).await?))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::error::{ErrorBody, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE, TIMEOUT_MESSAGE};
use shared::QueryError;
use tracing::error;

use crate::db::DbError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    /// 参数缺失或超出范围 (400)
    BadRequest(String),

    #[error("Not Found")]
    /// 路由不存在 (404)
    NotFound,

    #[error("Request Timeout")]
    /// 请求超时 (408)
    Timeout,

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::BadRequest(msg) => msg.as_str(),
            AppError::NotFound => NOT_FOUND_MESSAGE,
            AppError::Timeout => TIMEOUT_MESSAGE,
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                INTERNAL_ERROR_MESSAGE
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                INTERNAL_ERROR_MESSAGE
            }
        };

        (status, Json(ErrorBody::new(status.as_u16(), message))).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Application-level Result type used by HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn query_errors_become_bad_request() {
        let (status, body) = body_of(QueryError::YearRequired.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorBody::new(400, "year is required"));
    }

    #[tokio::test]
    async fn database_details_are_not_exposed() {
        let (status, body) =
            body_of(AppError::Database("connection refused on 10.0.0.3".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        assert_eq!(body.status, 500);
        assert_eq!(body.kind, "error");
    }

    #[tokio::test]
    async fn internal_errors_share_the_generic_body() {
        let (status, body) = body_of(AppError::Internal("state missing".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorBody::new(500, "Internal Server Error"));
    }

    #[tokio::test]
    async fn timeout_uses_fixed_body() {
        let (status, body) = body_of(AppError::Timeout).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, ErrorBody::new(408, "Request Timeout"));
    }

    #[tokio::test]
    async fn not_found_uses_fixed_body() {
        let (status, body) = body_of(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, ErrorBody::not_found());
    }
}
