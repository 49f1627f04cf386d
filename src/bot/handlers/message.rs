use std::sync::Arc;

use teloxide::prelude::*;

use super::HandlerResult;
use crate::bot::commands::Command;
use crate::bot::router::{InboundMessage, MessageRouter, GREETING};
use crate::services::owghat::OwghatClient;

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, GREETING).await?;
        }
    }
    Ok(())
}

/// Treats any non-command text as a city lookup and forwards it through the
/// message router.
pub async fn city_handler(
    bot: Bot,
    msg: Message,
    router: Arc<MessageRouter<OwghatClient>>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        // Stickers, photos and the like get no reply
        return Ok(());
    };

    let inbound = InboundMessage {
        chat_id: msg.chat.id.0,
        text: text.to_string(),
        received_at: msg.date.timestamp(),
    };

    if let Some(outbound) = router.route(&inbound).await {
        bot.send_message(ChatId(outbound.chat_id), outbound.text)
            .await?;
    }

    Ok(())
}
