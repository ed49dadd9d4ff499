use teloxide::prelude::*;

use crate::bot::commands::{book, cancellations};
use crate::bot::state::{BookingDialogue, BookingState, HandlerResult, SessionNames};
use crate::store::connection::StoreManager;
use crate::utils::feedback::CommandFeedback;
use crate::utils::validation::validate_player_name;

/// Free-text messages, routed by the chat's dialogue state. Outside a
/// flow, stray text is ignored apart from a hint for unknown commands.
pub async fn text_handler(
    bot: Bot,
    dialogue: BookingDialogue,
    state: BookingState,
    msg: Message,
    store: StoreManager,
    names: SessionNames,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    match state {
        BookingState::ReceivingName { date, time } => {
            let name = match validate_player_name(text) {
                Ok(name) => name,
                Err(e) => {
                    // Stay in the same state and ask again.
                    CommandFeedback::new(bot, chat_id)
                        .validation_error(&e.to_string(), "Please type your full name:")
                        .await?;
                    return Ok(());
                }
            };

            names.set(chat_id, name.clone()).await;
            book::claim_and_confirm(&bot, chat_id, &store.pool, &date, &time, &name).await?;
            dialogue.exit().await?;
        }

        BookingState::ReceivingCancelName => {
            let name = match validate_player_name(text) {
                Ok(name) => name,
                Err(e) => {
                    CommandFeedback::new(bot, chat_id)
                        .validation_error(&e.to_string(), "Please enter the name you used to book:")
                        .await?;
                    return Ok(());
                }
            };

            names.set(chat_id, name.clone()).await;
            cancellations::send_booking_choices(&bot, chat_id, &store.pool, &name).await?;
            dialogue.exit().await?;
        }

        _ => {
            if text.starts_with('/') {
                let command = text.split_whitespace().next().unwrap_or(text);
                CommandFeedback::new(bot, chat_id)
                    .validation_error(
                        &format!("Unknown command: {command}"),
                        "Use /help to see all available commands.",
                    )
                    .await?;
            }
            // Other stray text is ignored to avoid spam.
        }
    }

    Ok(())
}
