use anyhow::{anyhow, Result};

/// Checks a player name typed in chat and hands it back trimmed. The name
/// is written into the slot table verbatim, so it must stay a single line.
pub fn validate_player_name(name: &str) -> Result<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Player name cannot be empty"));
    }

    if name.len() > 100 {
        return Err(anyhow!("Player name cannot be longer than 100 characters"));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(anyhow!("Player name cannot contain line breaks"));
    }

    Ok(name.to_string())
}
