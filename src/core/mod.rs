//! 核心模块
//! 配额与配置逻辑，不依赖 Web 框架

pub mod config;
pub mod quota;
pub mod scheduler;

// 重导出常用类型
pub use config::RelayConfig;
pub use quota::{ChatId, QuotaTracker};
