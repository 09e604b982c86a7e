use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::navigation::{Action, ConversationId, Navigator};
use crate::utils::logging::log_command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    navigator: Arc<Navigator>,
) -> ResponseResult<()> {
    let username = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);

    match cmd {
        Command::Help => {
            log_command("help", username, user_id, msg.chat.id.0);
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            log_command("start", username, user_id, msg.chat.id.0);
            let reply = navigator.handle(ConversationId(msg.chat.id.0), Action::Start);
            let markup = super::reply_markup(&reply);
            bot.send_message(msg.chat.id, reply.text)
                .reply_markup(markup)
                .await?;
        }
    }
    Ok(())
}
