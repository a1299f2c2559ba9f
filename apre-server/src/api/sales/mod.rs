//! Sales report API 模块
//!
//! | 路径 | 说明 |
//! |------|------|
//! | /regions | 销售区域列表 |
//! | /regions/{region} | 区域内按销售员汇总 |
//! | /salespeople | 销售员列表 |
//! | /salespeople/{personName} | 销售员按品类/渠道/区域汇总 |
//! | /customers, /products, /categories, /channels | 去重值列表 |
//! | /sales-by-year?year= | 年度按销售员汇总 |
//! | /monthly?month=&year= | 指定月份的销售明细 |

mod handler;

use axum::{Router, routing::get};
use shared::routes::{self, sales};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(&format!("{}{}", routes::API_PREFIX, routes::SALES), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(sales::REGIONS, get(handler::list_regions))
        .route(&format!("{}/{{region}}", sales::REGIONS), get(handler::by_region))
        .route(sales::SALESPEOPLE, get(handler::list_salespeople))
        .route(
            &format!("{}/{{person_name}}", sales::SALESPEOPLE),
            get(handler::by_salesperson),
        )
        .route(sales::CUSTOMERS, get(handler::list_customers))
        .route(sales::PRODUCTS, get(handler::list_products))
        .route(sales::CATEGORIES, get(handler::list_categories))
        .route(sales::CHANNELS, get(handler::list_channels))
        .route(sales::SALES_BY_YEAR, get(handler::by_year))
        .route(sales::MONTHLY, get(handler::monthly))
}
