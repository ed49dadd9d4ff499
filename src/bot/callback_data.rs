//! Typed inline-keyboard callback payloads.
//!
//! Payloads are `kind:field` strings: `date:<date>`, `time:<date>:<time>`
//! and `cancel:<date>:<time>`. Time labels may themselves contain `:`
//! (e.g. "10:00"), so the date is always the first `:`-free field and the
//! time is the remainder. The canceling player's name is deliberately not
//! part of the payload; it comes from the chat's saved name instead.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackData {
    Date { date: String },
    Time { date: String, time: String },
    Cancel { date: String, time: String },
}

impl CallbackData {
    pub fn encode(&self) -> String {
        match self {
            Self::Date { date } => format!("date:{date}"),
            Self::Time { date, time } => format!("time:{date}:{time}"),
            Self::Cancel { date, time } => format!("cancel:{date}:{time}"),
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        if let Some(date) = data.strip_prefix("date:") {
            if date.is_empty() {
                return None;
            }
            return Some(Self::Date {
                date: date.to_string(),
            });
        }

        if let Some(rest) = data.strip_prefix("time:") {
            let (date, time) = split_slot(rest)?;
            return Some(Self::Time { date, time });
        }

        if let Some(rest) = data.strip_prefix("cancel:") {
            let (date, time) = split_slot(rest)?;
            return Some(Self::Cancel { date, time });
        }

        None
    }
}

fn split_slot(rest: &str) -> Option<(String, String)> {
    let (date, time) = rest.split_once(':')?;
    if date.is_empty() || time.is_empty() {
        return None;
    }
    Some((date.to_string(), time.to_string()))
}
