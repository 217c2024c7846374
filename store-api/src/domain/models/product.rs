use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// products 表记录
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// 校验通过的新增商品输入, 缺省字段已填充默认值
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
    pub stock_quantity: i32,
}
