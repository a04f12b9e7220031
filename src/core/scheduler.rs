use crate::core::quota::QuotaTracker;
use crate::state::AppState;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, info};

/// 启动后台清理任务：定期丢弃非当日的配额记录
pub fn start_scheduler(state: Arc<AppState>) {
    tokio::spawn(async move {
        info!("Quota cleanup scheduler started");

        // 每小时扫描一次
        let mut interval = time::interval(Duration::from_secs(3600));

        loop {
            interval.tick().await;

            let today = QuotaTracker::today();
            let removed = state.quota.prune_stale(&today);
            if removed > 0 {
                debug!("清理了 {} 条过期配额记录", removed);
            }
        }
    });
}
