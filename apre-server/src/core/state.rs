use std::sync::Arc;

use crate::core::Config;
use crate::db::{DbResult, MongoReportStore, MongoService, ReportStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | reports | Arc<dyn ReportStore> | 报表查询 |
///
/// Clone is cheap (an `Arc` bump), so axum clones it into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub reports: Arc<dyn ReportStore>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试中注入内存实现)
    pub fn new(config: Config, reports: Arc<dyn ReportStore>) -> Self {
        Self { config, reports }
    }

    /// 初始化服务器状态：连接 MongoDB 并创建报表存储
    pub async fn initialize(config: &Config) -> DbResult<Self> {
        let mongo = MongoService::connect(config).await?;

        if let Err(e) = mongo.ping().await {
            // Keep serving: report routes fail with 500 until the database is back
            tracing::warn!(error = %e, "MongoDB ping failed at startup");
        }

        let reports: Arc<dyn ReportStore> = Arc::new(MongoReportStore::new(mongo));
        Ok(Self::new(config.clone(), reports))
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
