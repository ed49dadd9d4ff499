use sqlx::SqlitePool;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::callback_data::CallbackData;
use crate::bot::state::{BookingDialogue, BookingState, HandlerResult, SessionNames};
use crate::store::slots::Slot;
use crate::utils::feedback::CommandFeedback;

/// Entry point shared by /cancel and /mybookings: both end with the
/// player's bookings rendered as cancel choices. With a saved name the
/// prompt step is skipped.
pub async fn handle_cancellations_entry(
    bot: Bot,
    dialogue: BookingDialogue,
    msg: Message,
    pool: &SqlitePool,
    names: &SessionNames,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    tracing::info!("Bookings lookup in chat {}", chat_id);

    if let Some(name) = names.get(chat_id).await {
        send_booking_choices(&bot, chat_id, pool, &name).await?;
        dialogue.exit().await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Please enter the name you used to book:")
        .await?;
    dialogue.update(BookingState::ReceivingCancelName).await?;

    Ok(())
}

/// Renders `name`'s bookings as a cancel keyboard, or reports that there
/// are none. Terminal step of both the prompted and the saved-name path.
pub async fn send_booking_choices(
    bot: &Bot,
    chat_id: ChatId,
    pool: &SqlitePool,
    name: &str,
) -> HandlerResult {
    let bookings = Slot::bookings_for(pool, name).await?;

    if bookings.is_empty() {
        CommandFeedback::new(bot.clone(), chat_id)
            .error(&format!("No bookings found under \"{name}\"."))
            .await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Select a practice to cancel:")
        .reply_markup(cancel_keyboard(&bookings))
        .await?;

    Ok(())
}

/// One button per booking, labelled "date at time".
pub fn cancel_keyboard(bookings: &[(String, String)]) -> InlineKeyboardMarkup {
    let rows = bookings
        .iter()
        .map(|(date, time)| {
            let payload = CallbackData::Cancel {
                date: date.clone(),
                time: time.clone(),
            }
            .encode();
            vec![InlineKeyboardButton::callback(
                format!("{date} at {time}"),
                payload,
            )]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}
