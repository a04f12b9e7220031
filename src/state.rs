//! Web 应用状态

use crate::bot::backend::BackendClient;
use crate::bot::telegram::TelegramClient;
use crate::core::config::RelayConfig;
use crate::core::quota::QuotaTracker;
use std::sync::Arc;

pub struct AppState {
    pub config: RelayConfig,
    pub quota: Arc<QuotaTracker>,
    pub telegram: Arc<TelegramClient>,
    pub backend: Arc<BackendClient>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, String> {
        let telegram = Arc::new(TelegramClient::new(&config.bot_token));
        let backend = Arc::new(BackendClient::new(&config)?);

        Ok(Self {
            config,
            quota: Arc::new(QuotaTracker::new()),
            telegram,
            backend,
        })
    }
}
