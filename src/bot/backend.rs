//! AI 文本生成后端客户端

use crate::core::config::RelayConfig;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use serde_json::json;
use std::future::Future;
use std::time::Duration;

/// 文本生成后端。生产实现为 [`BackendClient`]，测试用桩实现。
pub trait CompletionBackend: Send + Sync {
    /// 将用户消息转发给后端，返回回复文本。
    /// 非 2xx、网络错误、超时、响应不可解析均为 [`AppError::Backend`]/[`AppError::Network`]，
    /// 2xx 但缺少 reply 字段为 [`AppError::EmptyReply`]。
    fn complete(&self, prompt: &str) -> impl Future<Output = AppResult<String>> + Send;
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    reply: Option<String>,
}

pub struct BackendClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl BackendClient {
    pub fn new(config: &RelayConfig) -> Result<Self, String> {
        // 超时视为后端失败，避免挂起的上游调用占住整个 turn
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| format!("构建 HTTP 客户端失败: {}", e))?;

        Ok(Self {
            client,
            url: config.backend_url.clone(),
            api_key: config.backend_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

impl CompletionBackend for BackendClient {
    fn complete(&self, prompt: &str) -> impl Future<Output = AppResult<String>> + Send {
        let payload = json!({
            "prompt": prompt,
            "model": self.model,
            "max_tokens": self.max_tokens,
        });

        async move {
            let response = self
                .client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(AppError::Backend(format!("HTTP {}", status)));
            }

            let data: CompletionResponse = response
                .json()
                .await
                .map_err(|e| AppError::Backend(format!("响应解析失败: {}", e)))?;

            data.reply
                .filter(|reply| !reply.is_empty())
                .ok_or(AppError::EmptyReply)
        }
    }
}
