//! Telegram 出站消息客户端

use crate::core::quota::ChatId;
use serde_json::json;
use std::future::Future;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// 回复发送通道。生产实现为 [`TelegramClient`]，测试用记录桩。
pub trait ReplyTransport: Send + Sync {
    fn send_message(&self, chat_id: ChatId, text: &str) -> impl Future<Output = ()> + Send;
}

pub struct TelegramClient {
    client: reqwest::Client,
    send_url: String,
}

impl TelegramClient {
    pub fn new(bot_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            send_url: format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, bot_token),
        }
    }
}

impl ReplyTransport for TelegramClient {
    /// fire-and-forget：发送失败只记日志，不向调用方传播
    fn send_message(&self, chat_id: ChatId, text: &str) -> impl Future<Output = ()> + Send {
        let body = json!({ "chat_id": chat_id, "text": text });
        async move {
            match self.client.post(&self.send_url).json(&body).send().await {
                Ok(res) if !res.status().is_success() => {
                    tracing::warn!("sendMessage 返回非成功状态: {}", res.status());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("sendMessage 网络错误: {}", e);
                }
            }
        }
    }
}
