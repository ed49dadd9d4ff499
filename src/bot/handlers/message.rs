use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{book, cancellations, Command};
use crate::bot::state::{BookingDialogue, HandlerResult, SessionNames};
use crate::store::connection::StoreManager;
use crate::utils::feedback::CommandFeedback;
use crate::utils::validation::validate_player_name;

pub async fn command_handler(
    bot: Bot,
    dialogue: BookingDialogue,
    msg: Message,
    cmd: Command,
    store: StoreManager,
    names: SessionNames,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            dialogue.exit().await?;
            let welcome = "👋 <b>Welcome to your practice booking bot!</b>\n\n\
                This bot helps you schedule, view and cancel practice sessions \
                with your coach.\n\n\
                📌 <b>Available commands:</b>\n\
                • /book - Book a practice slot 🏀\n\
                • /mybookings - View your booked practices 📘\n\
                • /cancel - Cancel a booking ❎\n\
                • /setname - Save the name you book under\n\n\
                ⏳ The bot may take a few seconds to reach the schedule.\n\
                Let's get you on the court! 💪";
            bot.send_message(msg.chat.id, welcome)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Book => {
            book::handle_book(bot, dialogue, msg, &store.pool).await?;
        }
        Command::Mybookings | Command::Cancel => {
            cancellations::handle_cancellations_entry(bot, dialogue, msg, &store.pool, &names)
                .await?;
        }
        Command::Setname { name } => match validate_player_name(&name) {
            Ok(name) => {
                tracing::info!("Chat {} set display name '{}'", msg.chat.id, name);
                names.set(msg.chat.id, name.clone()).await;
                CommandFeedback::new(bot, msg.chat.id)
                    .success(&format!("Got it, you are booking as {name}."))
                    .await?;
            }
            Err(e) => {
                CommandFeedback::new(bot, msg.chat.id)
                    .validation_error(&e.to_string(), "Usage: /setname Your Name")
                    .await?;
            }
        },
    }
    Ok(())
}
