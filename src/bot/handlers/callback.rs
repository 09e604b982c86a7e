use std::sync::Arc;

use teloxide::prelude::*;

use crate::navigation::{Action, ConversationId, Navigator};
use crate::utils::logging::{log_action, log_ignored_action};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    navigator: Arc<Navigator>,
) -> ResponseResult<()> {
    let username = q.from.username.as_deref().unwrap_or("unknown");
    let user_id = q.from.id.0;

    if let (Some(data), Some(message)) = (q.data.clone(), q.message.clone()) {
        let chat_id = message.chat.id.0;
        match Action::decode(&data) {
            Some(action) => {
                log_action(&data, username, user_id, chat_id);
                let reply = navigator.handle(ConversationId(chat_id), action);
                let markup = super::reply_markup(&reply);
                bot.edit_message_text(message.chat.id, message.id, reply.text)
                    .reply_markup(markup)
                    .await?;
                bot.answer_callback_query(q.id).await?;
            }
            None => {
                // Stale button from an older render: acknowledge so the
                // client stops its spinner, send nothing.
                log_ignored_action(&data, chat_id);
                bot.answer_callback_query(q.id).await?;
            }
        }
    } else {
        bot.answer_callback_query(q.id).await?;
    }

    Ok(())
}
