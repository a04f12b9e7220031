// bot 模块 - 消息解析、命令分发与出站调用

pub mod backend;
pub mod commands;
pub mod router;
pub mod telegram;
pub mod update;

pub use backend::{BackendClient, CompletionBackend};
pub use telegram::{ReplyTransport, TelegramClient};
pub use update::Update;
