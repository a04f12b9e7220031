use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// 应用统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    /// 后端返回非成功状态或响应无法解析
    #[error("AI 后端错误: {0}")]
    Backend(String),

    /// 后端 2xx 但响应缺少 reply 字段
    #[error("AI 响应缺少 reply 字段")]
    EmptyReply,
}
