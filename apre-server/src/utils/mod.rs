//! 工具模块 - 错误类型和日志
//!
//! - [`AppError`] - 应用错误类型
//! - [`logger`] - tracing 初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
