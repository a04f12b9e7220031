use crate::bot::router;
use crate::bot::update::Update;
use crate::state::AppState;
use axum::extract::{Json, State};
use std::sync::Arc;

/// Telegram webhook 入口。
/// 无论处理结果如何都回 200 "ok"——回复通过 sendMessage 异步送达，
/// webhook 传输层只需要知道我们收到了。
pub async fn handle_update(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> &'static str {
    // 宽松解析：形状不符的 update 当作畸形输入静默忽略
    let update: Update = match serde_json::from_value(body) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("无法解析的 webhook body: {}", e);
            return "ok";
        }
    };

    router::run_turn(
        &update,
        &state.quota,
        &state.config,
        state.backend.as_ref(),
        state.telegram.as_ref(),
    )
    .await;

    "ok"
}
