//! 运行时配置模型

/// 进程启动时构建一次的配置，通过 AppState 注入到各组件
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Telegram Bot API token
    pub bot_token: String,
    /// AI 后端的 Bearer token
    pub backend_api_key: String,
    /// AI 后端地址
    pub backend_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// 每用户每日 AI 请求上限
    pub daily_limit: u32,
    /// AI 后端请求超时（秒）
    pub request_timeout: u64,
    /// 后端调用失败时是否退还当次配额（默认保持原始策略：不退还）
    pub refund_on_failure: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            backend_api_key: String::new(),
            backend_url: "https://api.gemini.com/free/ai".to_string(),
            model: "fast-deep".to_string(),
            max_tokens: 200,
            daily_limit: 15,
            request_timeout: 30,
            refund_on_failure: false,
        }
    }
}
