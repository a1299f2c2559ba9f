/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | MONGO_URL | mongodb://localhost:27017 | MongoDB 连接串 |
/// | MONGO_DATABASE | apre | 数据库名 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CORS_ORIGIN | (permissive) | 允许的客户端来源 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | LOG_FORMAT | text | text / json |
///
/// # 示例
///
/// ```ignore
/// MONGO_URL=mongodb://db:27017 HTTP_PORT=8080 cargo run -p apre-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub mongo_url: String,
    pub mongo_database: String,
    /// development | staging | production
    pub environment: String,
    /// `None` allows any origin
    pub cors_origin: Option<String>,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            http_host: non_empty("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: non_empty("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            mongo_url: non_empty("MONGO_URL")
                .unwrap_or_else(|| "mongodb://localhost:27017".into()),
            mongo_database: non_empty("MONGO_DATABASE").unwrap_or_else(|| "apre".into()),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            cors_origin: non_empty("CORS_ORIGIN"),
            request_timeout_ms: non_empty("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            log_json: non_empty("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
