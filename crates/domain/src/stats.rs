//! Stat snapshot types as supplied by the game API.
//!
//! These are read-only inputs: the evaluators never mutate a snapshot, they
//! only compare it against the persisted [`SubscriberRecord`] flags.
//!
//! [`SubscriberRecord`]: crate::subscriber::SubscriberRecord

use serde::{Deserialize, Serialize};

/// A refillable bar (energy or nerve) with its current and maximum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarStats {
    pub current: u32,
    pub maximum: u32,
}

impl BarStats {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Whether the bar sits exactly at its maximum.
    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

/// Travel state: seconds until landing and where the player is headed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelStats {
    /// Seconds remaining until arrival; 0 when not traveling.
    pub time_left: u64,
    pub destination: String,
}

/// Player state timestamps reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStates {
    /// Unix seconds at which the player leaves the hospital; 0 when out.
    pub hospital_timestamp: u64,
}

/// The player's last recorded activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    pub status: String,
}

impl LastAction {
    /// Whether the player is actively in-game right now.
    ///
    /// Online players see hospital events on screen, so the hospital
    /// evaluator suppresses the push (but not the state update) for them.
    pub fn is_online(&self) -> bool {
        self.status == "Online"
    }
}

/// Snapshot of a player's tracked stats, deserialized from the game API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub energy: BarStats,
    pub nerve: BarStats,
    pub travel: TravelStats,
    pub states: PlayerStates,
    pub last_action: LastAction,
}
