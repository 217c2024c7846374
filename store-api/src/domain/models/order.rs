use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;

use crate::utils::datetime::format_datetime;

/// 订单创建后的唯一状态, 本版本不存在状态迁移
pub const ORDER_STATUS_PENDING: &str = "pending";

/// orders 表记录; items 以 JSON 文档列存储
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_address: String,
    pub total_amount: Decimal,
    pub items: Json<Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// 订单列表展示记录: items 解析回结构化形式, 附带格式化下单时间
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_address: String,
    pub total_amount: Decimal,
    pub items: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub order_date: String,
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        let order_date = format_datetime(&order.created_at);

        Self {
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            total_amount: order.total_amount,
            items: order.items.0,
            status: order.status,
            created_at: order.created_at,
            order_date,
        }
    }
}

/// 校验通过的订单输入
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total_amount: Decimal,
    pub items: Value,
}
