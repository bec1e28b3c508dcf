use goldbean_infrastructure::logging;
use goldbean_lib::application::config::AppConfig;
use goldbean_lib::presentation::bootstrap;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Read before the logger exists: it decides where the log file goes
    let config = AppConfig::from_env();
    let log_dir = config.as_ref().ok().and_then(|c| c.log_dir.clone());

    if let Err(e) = logging::init_logger(log_dir) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
        eprintln!("   Falling back to console logging only");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .try_init();
    }

    tracing::info!("🏁 嘉立创自动签到任务开始");

    // Every failure is reported in the log; the exit status stays 0
    match config {
        Ok(config) => {
            if let Err(e) = bootstrap::run(config).await {
                tracing::error!("❌ {:#}", e);
            }
        }
        Err(e) => tracing::error!("❌ 配置错误: {}", e),
    }

    tracing::info!("🏁 任务执行完毕");
}
