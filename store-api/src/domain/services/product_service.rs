use serde_json::Value;

use crate::domain::models::product::{NewProduct, Product};
use crate::error::AppError;
use crate::infrastructure::database::mysql::ConnectionManager;
use crate::utils::type_convert::decimal_from_value;

pub struct ProductService<'a> {
    db: &'a ConnectionManager,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a ConnectionManager) -> Self {
        Self { db }
    }

    /// 商品列表, 最新创建的在前
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut conn = self.db.acquire().await?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(products)
    }

    /// 新增商品, 返回数据库分配的 id
    pub async fn add(&self, payload: &Value) -> Result<u64, AppError> {
        let product = parse_product(payload)?;

        let mut conn = self.db.acquire().await?;

        let result = sqlx::query(
            "INSERT INTO products (name, price, description, image_url, category, stock_quantity) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(product.name)
        .bind(product.price)
        .bind(product.description)
        .bind(product.image_url)
        .bind(product.category)
        .bind(product.stock_quantity)
        .execute(&mut conn)
        .await?;

        Ok(result.last_insert_id())
    }
}

/// 名称必填且非空, 价格必填非空; 其余字段缺省时填默认值
fn parse_product(payload: &Value) -> Result<NewProduct, AppError> {
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty());

    let price = payload.get("price").filter(|price| !price.is_null());

    let (Some(name), Some(price)) = (name, price) else {
        return Err(AppError::Validation(
            "Name and price are required".to_string(),
        ));
    };

    let price = decimal_from_value(price)
        .ok_or_else(|| AppError::Validation("Price must be a number".to_string()))?;

    Ok(NewProduct {
        name: name.to_string(),
        description: payload
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        price,
        image_url: payload
            .get("image_url")
            .and_then(Value::as_str)
            .map(String::from),
        category: payload
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or("General")
            .to_string(),
        stock_quantity: payload
            .get("stock_quantity")
            .and_then(Value::as_i64)
            .map(|qty| qty as i32)
            .unwrap_or(10),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn applies_defaults_for_omitted_fields() {
        let product = parse_product(&json!({ "name": "Mouse", "price": 19.99 })).unwrap();

        assert_eq!(product.name, "Mouse");
        assert_eq!(product.price, Decimal::new(19_99, 2));
        assert_eq!(product.description, "");
        assert_eq!(product.image_url, None);
        assert_eq!(product.category, "General");
        assert_eq!(product.stock_quantity, 10);
    }

    #[test]
    fn keeps_provided_optional_fields() {
        let product = parse_product(&json!({
            "name": "Keyboard",
            "price": "49.90",
            "description": "Mechanical",
            "image_url": "https://example.com/kb.jpg",
            "category": "Electronics",
            "stock_quantity": 3
        }))
        .unwrap();

        assert_eq!(product.price, Decimal::new(49_90, 2));
        assert_eq!(product.description, "Mechanical");
        assert_eq!(product.image_url.as_deref(), Some("https://example.com/kb.jpg"));
        assert_eq!(product.category, "Electronics");
        assert_eq!(product.stock_quantity, 3);
    }

    #[test]
    fn rejects_missing_price() {
        let err = parse_product(&json!({ "name": "Widget" })).unwrap_err();
        assert_eq!(validation_message(err), "Name and price are required");
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        let err = parse_product(&json!({ "price": 1.0 })).unwrap_err();
        assert_eq!(validation_message(err), "Name and price are required");

        let err = parse_product(&json!({ "name": "", "price": 1.0 })).unwrap_err();
        assert_eq!(validation_message(err), "Name and price are required");
    }

    #[test]
    fn rejects_null_price() {
        let err = parse_product(&json!({ "name": "Widget", "price": null })).unwrap_err();
        assert_eq!(validation_message(err), "Name and price are required");
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err = parse_product(&json!({ "name": "Widget", "price": "cheap" })).unwrap_err();
        assert_eq!(validation_message(err), "Price must be a number");
    }

    #[test]
    fn negative_price_is_not_rejected() {
        let product = parse_product(&json!({ "name": "Refund", "price": -5 })).unwrap();
        assert_eq!(product.price, Decimal::new(-5, 0));
    }
}
