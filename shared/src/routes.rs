//! Report route paths
//!
//! Paths are relative to the API root (`/api` on the server,
//! `api_base_url` on the client).

/// Server-side prefix every route is nested under
pub const API_PREFIX: &str = "/api";

/// Sales report router
pub const SALES: &str = "/reports/sales";

/// Agent performance report router
pub const AGENT_PERFORMANCE: &str = "/reports/agent-performance";

pub mod sales {
    pub const REGIONS: &str = "/regions";
    pub const SALESPEOPLE: &str = "/salespeople";
    pub const CUSTOMERS: &str = "/customers";
    pub const PRODUCTS: &str = "/products";
    pub const CATEGORIES: &str = "/categories";
    pub const CHANNELS: &str = "/channels";
    pub const SALES_BY_YEAR: &str = "/sales-by-year";
    pub const MONTHLY: &str = "/monthly";
}

pub mod agent_performance {
    pub const REGIONS: &str = "/region/regions";
    pub const REGION: &str = "/region";
    pub const PERFORMANCE_BY_METRIC: &str = "/performance-by-metric";
    pub const AGENT_IDS: &str = "/agent-id";
    pub const CUSTOMER_FEEDBACK: &str = "/agent-performance-by-customer-feedback";
    pub const CALL_DURATION_BY_DATE_RANGE: &str = "/call-duration-by-date-range";
}
