use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod common;
mod webhook;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Webhook
        .route("/webhook", post(webhook::handle_update))
        // Health
        .route("/healthz", get(|| async { "ok" }))
        // 其余路径一律返回运行提示
        .fallback(|| async { "Telegram AI Bot is running" })
        .with_state(state)
}
