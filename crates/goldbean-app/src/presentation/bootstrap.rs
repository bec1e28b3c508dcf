use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::error;

use goldbean_infrastructure::http::JlcClient;
use goldbean_infrastructure::notification::ServerChanSender;

use crate::application::config::AppConfig;
use crate::application::services::{
    load_accounts, CheckInExecutor, CheckInRunner, NotificationService, RandomDelay, RunReport,
};

/// Wire the production client, sender and throttle from the configuration
pub fn build_runner(config: &AppConfig) -> Result<CheckInRunner> {
    let api = JlcClient::new(&config.platform_base_url, &config.timeouts)
        .context("Failed to create platform client")?;
    let sender = ServerChanSender::new(&config.serverchan_base_url, &config.timeouts)
        .context("Failed to create ServerChan sender")?;

    Ok(CheckInRunner::new(
        CheckInExecutor::new(Arc::new(api)),
        NotificationService::new(Arc::new(sender)),
        Arc::new(RandomDelay::new(config.delay)),
    ))
}

/// Load credentials and run. Configuration problems are logged and end the
/// run before any request is made; they are not reported as errors.
pub async fn run(config: AppConfig) -> Result<Option<RunReport>> {
    let entries = match load_accounts(&config.token_list, &config.send_key_list) {
        Ok(entries) => entries,
        Err(e) => {
            error!("❌ {}", e);
            return Ok(None);
        }
    };

    let runner = build_runner(&config)?;
    Ok(Some(runner.run(entries).await))
}
