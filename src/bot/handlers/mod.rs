pub mod callback;
pub mod message;

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::navigation::{Navigator, Reply};

pub struct BotHandler {
    pub navigator: Arc<Navigator>,
}

impl BotHandler {
    pub fn new(navigator: Arc<Navigator>) -> Self {
        Self { navigator }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let navigator = self.navigator.clone();
        let navigator_callback = self.navigator.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let navigator = navigator.clone();
                        async move { message::command_handler(bot, msg, cmd, navigator).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let navigator = navigator_callback.clone();
                async move { callback::callback_handler(bot, q, navigator).await }
            }))
    }
}

/// Maps a rendered reply's buttons to an inline keyboard, one per row.
pub(crate) fn reply_markup(reply: &Reply) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        reply
            .buttons
            .iter()
            .map(|button| vec![InlineKeyboardButton::callback(
                button.label.clone(),
                button.token.clone(),
            )]),
    )
}
