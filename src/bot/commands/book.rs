use sqlx::SqlitePool;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::callback_data::CallbackData;
use crate::bot::state::{BookingDialogue, BookingState, HandlerResult};
use crate::store::slots::{ClaimOutcome, Slot};
use crate::utils::feedback::CommandFeedback;

pub async fn handle_book(
    bot: Bot,
    dialogue: BookingDialogue,
    msg: Message,
    pool: &SqlitePool,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    tracing::info!("Book command in chat {}", chat_id);

    let dates = Slot::distinct_dates(pool).await?;
    if dates.is_empty() {
        CommandFeedback::new(bot, chat_id)
            .info("No practice dates are open for booking right now.")
            .await?;
        dialogue.exit().await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Choose a date:")
        .reply_markup(date_keyboard(&dates))
        .await?;
    dialogue.update(BookingState::ChoosingDate).await?;

    Ok(())
}

/// One button per date, one date per row.
pub fn date_keyboard(dates: &[String]) -> InlineKeyboardMarkup {
    let rows = dates
        .iter()
        .map(|date| {
            let payload = CallbackData::Date { date: date.clone() }.encode();
            vec![InlineKeyboardButton::callback(date.clone(), payload)]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// One button per free time on `date`, in row order.
pub fn time_keyboard(date: &str, times: &[String]) -> InlineKeyboardMarkup {
    let rows = times
        .iter()
        .map(|time| {
            let payload = CallbackData::Time {
                date: date.to_string(),
                time: time.clone(),
            }
            .encode();
            vec![InlineKeyboardButton::callback(time.clone(), payload)]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// Terminal booking step shared by the typed-name path and the saved-name
/// shortcut: claim the slot and report the outcome.
pub async fn claim_and_confirm(
    bot: &Bot,
    chat_id: ChatId,
    pool: &SqlitePool,
    date: &str,
    time: &str,
    name: &str,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot.clone(), chat_id);
    match Slot::claim(pool, date, time, name).await? {
        ClaimOutcome::Claimed => {
            tracing::info!("Claimed {} {} for '{}' in chat {}", date, time, name, chat_id);
            feedback
                .success(&format!("Booking confirmed for {name} on {date} at {time}!"))
                .await?;
        }
        ClaimOutcome::Taken => {
            feedback
                .error(&format!(
                    "Sorry, {date} at {time} was taken in the meantime. Try /book again."
                ))
                .await?;
        }
        ClaimOutcome::NotFound => {
            feedback
                .error("Sorry, that slot is no longer on the schedule.")
                .await?;
        }
    }
    Ok(())
}
