//! The setup boundary: roster validation and cosmetic catalogs.
//!
//! Validation happens here, once, before the engine is invoked. The
//! engine trusts a validated roster and never re-checks name uniqueness
//! or charset.

use serde::{Deserialize, Serialize};

use crate::core::SetupError;

/// Minimum table size.
pub const MIN_PLAYERS: usize = 4;

/// Maximum table size.
pub const MAX_PLAYERS: usize = 8;

/// Maximum display-name length in characters.
pub const NAME_MAX_LEN: usize = 20;

/// Card colors the setup UI offers, one per seat.
pub const PLAYER_COLORS: [&str; 8] = [
    "#dc2626", // Red
    "#2563eb", // Blue
    "#16a34a", // Green
    "#d97706", // Amber
    "#9333ea", // Purple
    "#0891b2", // Cyan
    "#db2777", // Pink
    "#65a30d", // Lime
];

/// Icon names the setup UI offers.
pub const PLAYER_ICONS: [&str; 8] = [
    "Crown", "Shield", "Sword", "Scroll", "Key", "Coins", "Flag", "Gem",
];

/// One seat's setup input: name plus cosmetic choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Validate a roster before handing it to the engine.
///
/// Checks, in order: table size 4-8; every name 1-20 characters drawn
/// from letters, digits, space, hyphen and underscore; names unique
/// case-insensitively. Failures are retryable user input errors.
pub fn validate_roster(roster: &[PlayerSetup]) -> Result<(), SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
        return Err(SetupError::PlayerCount(roster.len()));
    }

    for seat in roster {
        validate_name(&seat.name)?;
    }

    for (i, seat) in roster.iter().enumerate() {
        let lowered = seat.name.to_lowercase();
        if roster[..i].iter().any(|s| s.name.to_lowercase() == lowered) {
            return Err(SetupError::DuplicateName(seat.name.clone()));
        }
    }

    Ok(())
}

/// Validate a single display name.
pub fn validate_name(name: &str) -> Result<(), SetupError> {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_LEN {
        return Err(SetupError::NameLength(name.to_string()));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_');
    if !name.chars().all(allowed) {
        return Err(SetupError::NameCharset(name.to_string()));
    }
    Ok(())
}
