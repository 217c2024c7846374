use store_api::config::Config;
use store_api::error::AppError;
use store_api::infrastructure::database::{bootstrap, mysql::ConnectionManager};
use store_api::logging::init_logging;
use store_api::server::{AppState, create_app};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_logging(&config)?;

    tracing::info!("Starting e-commerce backend");

    let db = ConnectionManager::new(&config.database);

    // 初始化失败不阻止启动, 首个数据请求会再次暴露该故障
    if let Err(err) = bootstrap::initialize(&db).await {
        tracing::error!("Database initialization failed: {err}");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(AppState { config, db });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app).await?;
    Ok(())
}
