use rust_decimal::Decimal;
use sqlx::{Connection, mysql::MySqlConnection};

use super::mysql::ConnectionManager;
use crate::error::AppError;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    price DECIMAL(10, 2) NOT NULL,
    image_url VARCHAR(500),
    category VARCHAR(100),
    stock_quantity INT NOT NULL DEFAULT 10,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id INT AUTO_INCREMENT PRIMARY KEY,
    customer_name VARCHAR(255) NOT NULL,
    customer_email VARCHAR(255) NOT NULL,
    customer_phone VARCHAR(20),
    customer_address TEXT NOT NULL,
    total_amount DECIMAL(10, 2) NOT NULL,
    items JSON NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'pending',
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: Decimal,
    image_url: &'static str,
    category: &'static str,
    stock_quantity: i32,
}

fn seed_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "MacBook Pro",
            description: "Powerful laptop for professionals",
            price: Decimal::new(1_999_99, 2),
            image_url: "https://images.unsplash.com/photo-1511385348-a52b4a160dc2?w=400",
            category: "Electronics",
            stock_quantity: 15,
        },
        SeedProduct {
            name: "iPhone 15",
            description: "Latest smartphone with advanced features",
            price: Decimal::new(999_99, 2),
            image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
            category: "Electronics",
            stock_quantity: 25,
        },
        SeedProduct {
            name: "Sony Headphones",
            description: "Wireless noise-canceling headphones",
            price: Decimal::new(299_99, 2),
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            category: "Electronics",
            stock_quantity: 30,
        },
        SeedProduct {
            name: "Cotton T-Shirt",
            description: "Comfortable cotton t-shirt",
            price: Decimal::new(24_99, 2),
            image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            category: "Clothing",
            stock_quantity: 50,
        },
    ]
}

/// 建表 + 空目录时写入种子数据, 可重复执行
pub async fn initialize(db: &ConnectionManager) -> Result<(), AppError> {
    let mut conn = db.acquire().await?;

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut conn).await?;
    sqlx::query(CREATE_ORDERS_TABLE).execute(&mut conn).await?;

    seed_catalog(&mut conn).await?;

    tracing::info!("Database initialized successfully");
    Ok(())
}

/// FOR UPDATE 持有行锁, 并发首启只允许一个写入方通过 count 判定
async fn seed_catalog(conn: &mut MySqlConnection) -> Result<(), AppError> {
    let mut tx = conn.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products FOR UPDATE")
        .fetch_one(&mut *tx)
        .await?;

    if count == 0 {
        let products = seed_products();
        for product in &products {
            sqlx::query(
                "INSERT INTO products (name, description, price, image_url, category, stock_quantity) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.image_url)
            .bind(product.category)
            .bind(product.stock_quantity)
            .execute(&mut *tx)
            .await?;
        }
        tracing::info!("Seeded catalog with {} products", products.len());
    }

    tx.commit().await?;
    Ok(())
}
