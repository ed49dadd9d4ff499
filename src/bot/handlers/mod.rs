pub mod callback;
pub mod message;
pub mod text;

use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
};

use crate::bot::state::{BookingState, SessionNames};
use crate::store::connection::StoreManager;

pub struct BotHandler {
    pub store: StoreManager,
    pub names: SessionNames,
}

impl BotHandler {
    pub fn new(store: StoreManager) -> Self {
        Self {
            store,
            names: SessionNames::new(),
        }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let command_store = self.store.clone();
        let command_names = self.names.clone();
        let text_store = self.store.clone();
        let text_names = self.names.clone();
        let callback_store = self.store.clone();
        let callback_names = self.names.clone();

        dialogue::enter::<Update, InMemStorage<BookingState>, BookingState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, dialogue, msg, cmd| {
                        let store = command_store.clone();
                        let names = command_names.clone();
                        async move {
                            message::command_handler(bot, dialogue, msg, cmd, store, names).await
                        }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot, dialogue, state, msg| {
                let store = text_store.clone();
                let names = text_names.clone();
                async move { text::text_handler(bot, dialogue, state, msg, store, names).await }
            }))
            .branch(
                Update::filter_callback_query().endpoint(move |bot, dialogue, state, q| {
                    let store = callback_store.clone();
                    let names = callback_names.clone();
                    async move {
                        callback::callback_handler(bot, dialogue, state, q, store, names).await
                    }
                }),
            )
    }
}
