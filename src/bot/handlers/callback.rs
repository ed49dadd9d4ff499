use teloxide::prelude::*;

use crate::bot::callback_data::CallbackData;
use crate::bot::commands::book;
use crate::bot::state::{BookingDialogue, BookingState, HandlerResult, SessionNames};
use crate::store::connection::StoreManager;
use crate::store::slots::{ReleaseOutcome, Slot};
use crate::utils::feedback::CommandFeedback;

pub async fn callback_handler(
    bot: Bot,
    dialogue: BookingDialogue,
    state: BookingState,
    q: CallbackQuery,
    store: StoreManager,
    names: SessionNames,
) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;

    let Some(message) = q.message else {
        tracing::warn!("Callback from user {} without message context", q.from.id);
        return Ok(());
    };
    let chat_id = message.chat.id;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    tracing::info!("Callback '{}' in chat {}", data, chat_id);

    let Some(parsed) = CallbackData::parse(data) else {
        tracing::warn!("Unrecognized callback payload '{}' in chat {}", data, chat_id);
        return Ok(());
    };

    match parsed {
        CallbackData::Date { date } => {
            // Stale date button outside the booking flow.
            if state != BookingState::ChoosingDate {
                return Ok(());
            }

            let times = Slot::available_times(&store.pool, &date).await?;
            if times.is_empty() {
                bot.edit_message_text(
                    chat_id,
                    message.id,
                    "Sorry, no slots are free on this date.",
                )
                .await?;
                dialogue.exit().await?;
                return Ok(());
            }

            bot.edit_message_text(chat_id, message.id, format!("Choose a time for {date}:"))
                .reply_markup(book::time_keyboard(&date, &times))
                .await?;
            dialogue.update(BookingState::ChoosingTime { date }).await?;
        }

        CallbackData::Time { date, time } => {
            match &state {
                BookingState::ChoosingTime { date: chosen } if *chosen == date => {}
                _ => return Ok(()),
            }

            if let Some(name) = names.get(chat_id).await {
                bot.edit_message_text(chat_id, message.id, format!("You selected {date} at {time}."))
                    .await?;
                book::claim_and_confirm(&bot, chat_id, &store.pool, &date, &time, &name).await?;
                dialogue.exit().await?;
            } else {
                bot.edit_message_text(
                    chat_id,
                    message.id,
                    format!("You selected {date} at {time}.\n\nPlease type your full name:"),
                )
                .await?;
                dialogue
                    .update(BookingState::ReceivingName { date, time })
                    .await?;
            }
        }

        // Cancel buttons stay valid in any state; the keyboard may be old.
        CallbackData::Cancel { date, time } => {
            let Some(name) = names.get(chat_id).await else {
                CommandFeedback::new(bot, chat_id)
                    .error("I no longer know which name you booked under. Run /cancel again.")
                    .await?;
                dialogue.exit().await?;
                return Ok(());
            };

            match Slot::release(&store.pool, &date, &time, &name).await? {
                ReleaseOutcome::Released => {
                    tracing::info!(
                        "Released {} {} for '{}' in chat {}",
                        date,
                        time,
                        name,
                        chat_id
                    );
                    bot.edit_message_text(
                        chat_id,
                        message.id,
                        format!("❎ Cancelled: {date} at {time} for {name}"),
                    )
                    .await?;
                }
                ReleaseOutcome::NotFound => {
                    bot.edit_message_text(
                        chat_id,
                        message.id,
                        format!("Sorry, no booking for {name} on {date} at {time} was found."),
                    )
                    .await?;
                }
            }
            dialogue.exit().await?;
        }
    }

    Ok(())
}
