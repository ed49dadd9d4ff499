use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tokio::sync::Mutex;

pub type BookingDialogue = Dialogue<BookingState, InMemStorage<BookingState>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Per-chat conversation state. One value per chat, owned by the dialogue
/// storage, cleared back to `Idle` whenever a flow completes or is
/// abandoned. The scratch fields ride along in the variant that needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingState {
    #[default]
    Idle,
    /// A date keyboard is on screen.
    ChoosingDate,
    /// A time keyboard for `date` is on screen.
    ChoosingTime { date: String },
    /// Waiting for the player to type the name to book (date, time) under.
    ReceivingName { date: String, time: String },
    /// Waiting for the player to type the name to look up bookings for.
    ReceivingCancelName,
}

/// Saved display names, one per chat. Set explicitly with /setname or
/// remembered from the last name the player typed in a flow. In-process
/// only; lost on restart like the rest of the session state.
#[derive(Clone, Default)]
pub struct SessionNames {
    inner: Arc<Mutex<HashMap<ChatId, String>>>,
}

impl SessionNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, chat_id: ChatId, name: String) {
        self.inner.lock().await.insert(chat_id, name);
    }

    pub async fn get(&self, chat_id: ChatId) -> Option<String> {
        self.inner.lock().await.get(&chat_id).cloned()
    }
}
