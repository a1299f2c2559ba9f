//! APRE Server - 报表 API 服务
//!
//! # 架构概述
//!
//! 基于 MongoDB 聚合管道的只读报表服务：
//!
//! - **销售报表** (`api::sales`): 区域、销售员、年度、月度
//! - **客服绩效报表** (`api::agent_performance`): 区域、指标、客户反馈、通话时长
//! - **数据库** (`db`): MongoDB 连接与聚合管道
//!
//! # 模块结构
//!
//! ```text
//! apre-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # MongoDB 访问、管道、报表存储
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use api::{App, build_app};
pub use core::{Config, Server, ServerError, ServerState};
pub use db::{DbError, MongoReportStore, MongoService, ReportStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境
///
/// 1. 加载 `.env` (可选)
/// 2. 按 `LOG_LEVEL` / `LOG_FORMAT` / `LOG_DIR` 初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv() {
        // .env 不存在是正常情况
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___    ____  ____  ______
   /   |  / __ \/ __ \/ ____/
  / /| | / /_/ / /_/ / __/
 / ___ |/ ____/ _, _/ /___
/_/  |_/_/   /_/ |_/_____/
        reporting server
    "#
    );
}
