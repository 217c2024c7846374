use std::time::Duration;

use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use tokio::time::sleep;

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// 连接失败重试: 固定间隔, 共 5 次
const MAX_ATTEMPTS: u32 = 5;
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// 所有存储访问都经由这里按请求获取独立连接, 不做连接池
#[derive(Clone)]
pub struct ConnectionManager {
    options: MySqlConnectOptions,
}

impl ConnectionManager {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .charset("utf8mb4");

        Self { options }
    }

    /// 打开一个新连接; 连接由调用方作用域持有, 离开作用域即释放
    pub async fn acquire(&self) -> Result<MySqlConnection, AppError> {
        let mut attempt = 1;
        loop {
            match MySqlConnection::connect_with(&self.options).await {
                Ok(conn) => return Ok(conn),
                Err(err) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(AppError::Connection(err));
                    }
                    tracing::warn!(
                        "Database connection failed, retrying... ({}/{})",
                        attempt,
                        MAX_ATTEMPTS
                    );
                    attempt += 1;
                    sleep(RETRY_DELAY).await;
                }
            }
        }
    }
}
