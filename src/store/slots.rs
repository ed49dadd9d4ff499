use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeSet;

/// Longest date or time label that still fits a `time:<date>:<time>`
/// callback payload within Telegram's 64 byte limit.
pub const MAX_LABEL_LEN: usize = 24;

/// One bookable slot: a (date, time) pair with the player occupying it.
/// An empty `player` means the slot is free. `row_id` is the physical
/// rowid of the backing row and the only handle used for mutation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Slot {
    pub row_id: i64,
    pub date: String,
    pub time: String,
    pub player: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The slot was free and now carries the player's name.
    Claimed,
    /// The first row matching (date, time) already carries another name.
    Taken,
    /// No row matches (date, time).
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The player's booking was cleared back to free.
    Released,
    /// No row matches (date, time) with this player's name on it.
    NotFound,
}

/// Checks slot labels at the store boundary. The date label must stay free
/// of `:` because it is the first field of every callback payload.
pub fn validate_slot_labels(date: &str, time: &str) -> Result<()> {
    let date = date.trim();
    let time = time.trim();

    if date.is_empty() || time.is_empty() {
        return Err(anyhow!("Slot date and time labels cannot be empty"));
    }

    if date.len() > MAX_LABEL_LEN || time.len() > MAX_LABEL_LEN {
        return Err(anyhow!(
            "Slot labels cannot be longer than {MAX_LABEL_LEN} characters"
        ));
    }

    if date.contains(':') {
        return Err(anyhow!("Slot date label cannot contain ':'"));
    }

    if date.contains('\n') || time.contains('\n') {
        return Err(anyhow!("Slot labels cannot contain line breaks"));
    }

    Ok(())
}

impl Slot {
    pub fn is_free(&self) -> bool {
        self.player.is_empty()
    }

    /// Reads the whole table in row order. Every higher-level operation
    /// starts from this full read; nothing is cached between calls.
    pub async fn read_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Slot>(
            "SELECT rowid AS row_id, date, time, player FROM slots ORDER BY rowid",
        )
        .fetch_all(pool)
        .await
    }

    /// Raw single-cell write. Last write wins; the occupancy-checked path
    /// is [`Slot::claim`].
    pub async fn write_player(
        pool: &SqlitePool,
        row_id: i64,
        player: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE slots SET player = ? WHERE rowid = ?")
            .bind(player)
            .bind(row_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Inserts a new free slot row. Only the `provision` admin tool calls
    /// this; the bot itself never creates or deletes rows.
    pub async fn provision(pool: &SqlitePool, date: &str, time: &str) -> Result<()> {
        validate_slot_labels(date, time)?;
        sqlx::query("INSERT INTO slots (date, time, player) VALUES (?, ?, '')")
            .bind(date.trim())
            .bind(time.trim())
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All distinct date labels across the table, sorted, booked or not.
    pub async fn distinct_dates(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows = Self::read_all(pool).await?;
        let dates: BTreeSet<String> = rows.into_iter().map(|slot| slot.date).collect();
        Ok(dates.into_iter().collect())
    }

    /// Time labels of free rows matching `date`, in row order.
    pub async fn available_times(
        pool: &SqlitePool,
        date: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows = Self::read_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|slot| slot.date == date && slot.is_free())
            .map(|slot| slot.time)
            .collect())
    }

    /// Claims the first row matching (date, time) for `player`. The write
    /// is conditional on the cell still being empty, so a racing claimant
    /// gets `Taken` instead of silently stealing the slot. The first match
    /// decides: a later duplicate row is never considered.
    pub async fn claim(
        pool: &SqlitePool,
        date: &str,
        time: &str,
        player: &str,
    ) -> Result<ClaimOutcome> {
        let player = player.trim();
        if player.is_empty() {
            return Err(anyhow!("Cannot claim a slot with an empty player name"));
        }

        let rows = Self::read_all(pool).await?;
        let Some(slot) = rows
            .iter()
            .find(|slot| slot.date == date && slot.time == time)
        else {
            return Ok(ClaimOutcome::NotFound);
        };

        if !slot.is_free() {
            return Ok(ClaimOutcome::Taken);
        }

        let updated = sqlx::query("UPDATE slots SET player = ? WHERE rowid = ? AND player = ''")
            .bind(player)
            .bind(slot.row_id)
            .execute(pool)
            .await?
            .rows_affected();

        if updated == 1 {
            Ok(ClaimOutcome::Claimed)
        } else {
            Ok(ClaimOutcome::Taken)
        }
    }

    /// Clears the first row matching (date, time) that carries exactly
    /// `player`. Anything else, including a free slot or someone else's
    /// booking, is `NotFound` and mutates nothing.
    pub async fn release(
        pool: &SqlitePool,
        date: &str,
        time: &str,
        player: &str,
    ) -> Result<ReleaseOutcome> {
        let player = player.trim();

        let rows = Self::read_all(pool).await?;
        let Some(slot) = rows
            .iter()
            .find(|slot| slot.date == date && slot.time == time && slot.player == player)
        else {
            return Ok(ReleaseOutcome::NotFound);
        };

        let updated = sqlx::query("UPDATE slots SET player = '' WHERE rowid = ? AND player = ?")
            .bind(slot.row_id)
            .bind(player)
            .execute(pool)
            .await?
            .rows_affected();

        if updated == 1 {
            Ok(ReleaseOutcome::Released)
        } else {
            Ok(ReleaseOutcome::NotFound)
        }
    }

    /// All (date, time) pairs booked under exactly `player`, in row order.
    /// Matching is case-sensitive after trimming the queried name.
    pub async fn bookings_for(
        pool: &SqlitePool,
        player: &str,
    ) -> Result<Vec<(String, String)>, sqlx::Error> {
        let player = player.trim();
        if player.is_empty() {
            // An empty name would match every free row.
            return Ok(Vec::new());
        }
        let rows = Self::read_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|slot| slot.player == player)
            .map(|slot| (slot.date, slot.time))
            .collect())
    }
}
