//! The durable per-name score record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One name's all-time entry in the durable leaderboard.
///
/// Keyed by exact display name across every session ever played on the
/// device. Created on a name's first appearance, updated in place after
/// every round, deleted only by a full reset.
///
/// Field names are a stable wire format; the durable blob must stay
/// readable across versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub name: String,
    pub rounds_played: u32,
    pub total_score: u32,
    pub wins: u32,
    pub last_played: DateTime<Utc>,
}
