//! 入站消息路由
//! 一条消息 = 一个 turn：畸形输入静默结束，命令走分发器，其余走配额 + AI 转发。
//! 每个 turn 至多发送一条回复。

use crate::bot::backend::CompletionBackend;
use crate::bot::commands;
use crate::bot::telegram::ReplyTransport;
use crate::bot::update::Update;
use crate::core::config::RelayConfig;
use crate::core::quota::QuotaTracker;
use crate::error::AppError;
use tracing::{debug, warn};

pub const LIMIT_REACHED_TEXT: &str = "🚫 Daily limit reached. Try again tomorrow.";
pub const API_ERROR_TEXT: &str = "⚠️ AI API error, please try later.";
pub const NO_REPLY_TEXT: &str = "⚠️ No response from AI.";

/// 处理一条入站消息
pub async fn run_turn<B, T>(
    update: &Update,
    quota: &QuotaTracker,
    config: &RelayConfig,
    backend: &B,
    transport: &T,
) where
    B: CompletionBackend,
    T: ReplyTransport,
{
    let Some((chat_id, text)) = update.extract() else {
        debug!("忽略畸形入站消息");
        return;
    };

    // 命令不经过配额消耗路径
    if text.starts_with(commands::COMMAND_MARKER) {
        let reply = commands::dispatch(text, chat_id, quota, config);
        transport.send_message(chat_id, &reply).await;
        return;
    }

    let today = QuotaTracker::today();
    if !quota.try_consume(chat_id, &today, config.daily_limit) {
        debug!("chat {} 已达每日上限 {}", chat_id, config.daily_limit);
        transport.send_message(chat_id, LIMIT_REACHED_TEXT).await;
        return;
    }

    let reply = match backend.complete(text).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("chat {} 的 AI 调用失败: {}", chat_id, e);
            // 默认策略：失败的调用仍计入当日配额
            if config.refund_on_failure {
                quota.refund(chat_id, &today);
            }
            match e {
                AppError::EmptyReply => NO_REPLY_TEXT.to_string(),
                _ => API_ERROR_TEXT.to_string(),
            }
        }
    };

    transport.send_message(chat_id, &reply).await;
}
