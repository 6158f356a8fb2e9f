//! userd - 用户记录 CRUD 服务
//!
//! - Domain: user/ (User 实体与校验)
//! - Application: ports
//! - Infrastructure: http, memory

use userd::config::{load_config, print_config};
use userd::infrastructure::http::{AppState, HttpServer, ServerConfig};
use userd::infrastructure::memory::InMemoryUserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},userd={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("userd - 用户记录 CRUD 服务");
    print_config(&config);

    // 创建内存用户存储（进程生命周期内有效，无持久化）
    let store = InMemoryUserStore::new().arc();

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(store);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）；监听失败会作为错误返回，进程以非零码退出
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
