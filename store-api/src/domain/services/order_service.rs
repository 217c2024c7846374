use serde_json::{Map, Value};
use sqlx::types::Json;

use crate::domain::models::order::{NewOrder, ORDER_STATUS_PENDING, Order, OrderRecord};
use crate::error::AppError;
use crate::infrastructure::database::mysql::ConnectionManager;
use crate::utils::type_convert::decimal_from_value;

/// 必填字段按固定顺序检查, 返回第一个缺失项
const REQUIRED_FIELDS: [&str; 5] = [
    "customer_name",
    "customer_email",
    "customer_address",
    "total_amount",
    "items",
];

pub struct OrderService<'a> {
    db: &'a ConnectionManager,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a ConnectionManager) -> Self {
        Self { db }
    }

    /// 创建订单, 状态固定写入 pending, 返回数据库分配的 id
    pub async fn create(&self, payload: &Value) -> Result<u64, AppError> {
        let order = parse_order(payload)?;

        let mut conn = self.db.acquire().await?;

        let result = sqlx::query(
            "INSERT INTO orders (customer_name, customer_email, customer_phone, customer_address, total_amount, items, status) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.customer_name)
        .bind(order.customer_email)
        .bind(order.customer_phone)
        .bind(order.customer_address)
        .bind(order.total_amount)
        .bind(Json(order.items))
        .bind(ORDER_STATUS_PENDING)
        .execute(&mut conn)
        .await?;

        Ok(result.last_insert_id())
    }

    /// 订单列表, 最新创建的在前, items 解析回结构化形式
    pub async fn list(&self) -> Result<Vec<OrderRecord>, AppError> {
        let mut conn = self.db.acquire().await?;

        let orders =
            sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC, id DESC")
                .fetch_all(&mut conn)
                .await?;

        Ok(orders.into_iter().map(OrderRecord::from).collect())
    }
}

/// 校验按声明顺序短路: 空载荷 → 缺失字段 → items 形态 → 金额解析 → 字段类型
fn parse_order(payload: &Value) -> Result<NewOrder, AppError> {
    let Some(data) = payload.as_object().filter(|data| !data.is_empty()) else {
        return Err(AppError::Validation("No data provided".to_string()));
    };

    for field in REQUIRED_FIELDS {
        if !data.contains_key(field) {
            return Err(AppError::Validation(format!(
                "Missing required field: {field}"
            )));
        }
    }

    match data["items"].as_array() {
        Some(items) if !items.is_empty() => {}
        _ => {
            return Err(AppError::Validation(
                "Items must be a non-empty list".to_string(),
            ));
        }
    }

    let total_amount = decimal_from_value(&data["total_amount"])
        .ok_or_else(|| AppError::Validation("Total amount must be a number".to_string()))?;

    Ok(NewOrder {
        customer_name: required_text(data, "customer_name")?,
        customer_email: required_text(data, "customer_email")?,
        customer_phone: data
            .get("customer_phone")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        customer_address: required_text(data, "customer_address")?,
        total_amount,
        items: data["items"].clone(),
    })
}

fn required_text(data: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{field} must be a string")))
}
