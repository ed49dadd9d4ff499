pub mod book;
pub mod cancellations;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Practice booking commands:")]
pub enum Command {
    #[command(description = "Show the welcome message")]
    Start,
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Book a practice slot")]
    Book,
    #[command(description = "List your booked practices")]
    Mybookings,
    #[command(description = "Cancel one of your bookings")]
    Cancel,
    #[command(description = "Save the name you book under")]
    Setname { name: String },
}
