use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram_ai_relay::api::{build_routes, common};
use telegram_ai_relay::core::config::RelayConfig;
use telegram_ai_relay::core::scheduler;
use telegram_ai_relay::state::AppState;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Telegram Bot API token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN")]
    bot_token: String,

    /// AI 后端的 Bearer token
    #[arg(long, env = "AI_API_KEY")]
    api_key: String,

    /// AI 后端地址
    #[arg(
        long,
        env = "AI_BACKEND_URL",
        default_value = "https://api.gemini.com/free/ai"
    )]
    backend_url: String,

    #[arg(long, default_value = "fast-deep")]
    model: String,

    #[arg(long, default_value_t = 200)]
    max_tokens: u32,

    /// 每用户每日 AI 请求上限
    #[arg(long, env = "DAILY_LIMIT", default_value_t = 15)]
    daily_limit: u32,

    /// AI 后端请求超时（秒）
    #[arg(long, default_value_t = 30)]
    request_timeout: u64,

    /// 后端调用失败时退还当次配额
    #[arg(long, default_value_t = false)]
    refund_on_failure: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = RelayConfig {
        bot_token: args.bot_token,
        backend_api_key: args.api_key,
        backend_url: args.backend_url,
        model: args.model,
        max_tokens: args.max_tokens,
        daily_limit: args.daily_limit,
        request_timeout: args.request_timeout,
        refund_on_failure: args.refund_on_failure,
    };

    let app_state = Arc::new(AppState::new(config).expect("Failed to init state"));

    // 后台清理过期配额记录
    scheduler::start_scheduler(app_state.clone());

    let app = build_routes(app_state.clone())
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(common::request_logger));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Server listening on {}", addr);
    tracing::info!(
        "Daily limit: {} responses per user, refund on failure: {}",
        app_state.config.daily_limit,
        app_state.config.refund_on_failure
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
