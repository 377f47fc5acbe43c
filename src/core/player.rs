//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, allocated by the session from a monotonic
//! counter and stable for the player's lifetime.
//!
//! ## Player
//!
//! A roster entry: display name, current balance, pending pool choice, and
//! the append-only history of resolved years.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::pool::PoolId;

/// Player identifier.
///
/// Ids are never reused within a session, including after removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One resolved year in a player's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// 1-based year the record belongs to.
    pub year: u32,
    /// Signed gain applied to the balance that year.
    pub gain: f64,
    /// Pool the player was in. `None` only when the year resolved without
    /// a selection (defensive path).
    pub pool: Option<PoolId>,
}

/// A roster entry.
///
/// Balances start at the session's configured starting balance and are only
/// mutated by year resolution and reset. History uses `im::Vector` so
/// snapshots of a player share structure with the live roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub balance: f64,
    /// Pending selection for the next year, cleared when the year resolves.
    pub pool_choice: Option<PoolId>,
    pub history: Vector<YearRecord>,
}

impl Player {
    /// Create a fresh player with the given starting balance.
    #[must_use]
    pub(crate) fn new(id: PlayerId, name: String, starting_balance: f64) -> Self {
        Self {
            id,
            name,
            balance: starting_balance,
            pool_choice: None,
            history: Vector::new(),
        }
    }

    /// Whether the player has a pending pool selection.
    #[must_use]
    pub fn has_choice(&self) -> bool {
        self.pool_choice.is_some()
    }

    /// Return the player to creation-time state, keeping id and name.
    pub(crate) fn reset(&mut self, starting_balance: f64) {
        self.balance = starting_balance;
        self.pool_choice = None;
        self.history = Vector::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p3 = PlayerId::new(3);

        assert_eq!(p3.raw(), 3);
        assert_eq!(format!("{}", p3), "Player 3");
    }

    #[test]
    fn test_new_player_state() {
        let player = Player::new(PlayerId::new(0), "Ana".to_string(), 1000.0);

        assert_eq!(player.balance, 1000.0);
        assert!(!player.has_choice());
        assert!(player.history.is_empty());
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut player = Player::new(PlayerId::new(7), "Rui".to_string(), 1000.0);
        player.balance = 1234.5;
        player.pool_choice = Some(PoolId::B);
        player.history.push_back(YearRecord {
            year: 1,
            gain: 234.5,
            pool: Some(PoolId::B),
        });

        player.reset(1000.0);

        assert_eq!(player.id, PlayerId::new(7));
        assert_eq!(player.name, "Rui");
        assert_eq!(player.balance, 1000.0);
        assert!(!player.has_choice());
        assert!(player.history.is_empty());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1), "Bia".to_string(), 1000.0);
        player.history.push_back(YearRecord {
            year: 1,
            gain: 50.0,
            pool: Some(PoolId::A),
        });

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
