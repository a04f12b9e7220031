//! 斜杠命令分发
//! 固定命令集，精确匹配；只读配额，从不走消耗路径

use crate::core::config::RelayConfig;
use crate::core::quota::{ChatId, QuotaTracker};

pub const COMMAND_MARKER: char = '/';

const HELP_TEXT: &str = "Commands:\n/start - Start bot\n/help - Show commands\n/usage - Check your remaining daily AI responses";
const UNKNOWN_TEXT: &str = "❌ Unknown command. Use /help to see commands.";

/// 根据命令文本生成固定回复
pub fn dispatch(
    text: &str,
    chat_id: ChatId,
    quota: &QuotaTracker,
    config: &RelayConfig,
) -> String {
    match text {
        "/start" => format!(
            "👋 Welcome! You can ask me anything. Daily limit: {} responses.",
            config.daily_limit
        ),
        "/help" => HELP_TEXT.to_string(),
        "/usage" => {
            let used = quota.get_usage(chat_id, &QuotaTracker::today());
            format!(
                "You have used {}/{} responses today.",
                used, config.daily_limit
            )
        }
        _ => UNKNOWN_TEXT.to_string(),
    }
}
