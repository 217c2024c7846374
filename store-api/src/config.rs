use config::Environment;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// 加载配置: 默认值 + 环境变量覆盖, 进程启动时调用一次
    pub fn load() -> Result<Self, AppError> {
        // 数据库连接参数沿用 MYSQL_* 环境变量约定
        let database = config::Config::builder()
            .set_default("host", "mysql")?
            .set_default("user", "root")?
            .set_default("password", "simple123")?
            .set_default("database", "e_commerce_db")?
            .add_source(Environment::with_prefix("MYSQL"))
            .build()?
            .try_deserialize()?;

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(Self {
            server: settings.get("server")?,
            database,
            logging: settings.get("logging")?,
        })
    }
}
