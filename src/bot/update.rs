//! Telegram webhook 入站数据模型

use crate::core::quota::ChatId;
use serde::Deserialize;

/// 一次 webhook 推送。非文本消息或其它 update 类型时 message/text 为 None。
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

impl Update {
    /// 提取 (chat_id, 去除首尾空白的文本)。
    /// 缺少 message、chat.id、text，或文本 trim 后为空，都视为畸形输入。
    pub fn extract(&self) -> Option<(ChatId, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        Some((message.chat.id, text))
    }
}
