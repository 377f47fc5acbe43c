//! # yield-clash
//!
//! Core engine for a facilitator-driven yield-pool simulation game.
//!
//! Players allocate a virtual balance across four yield pools with
//! different risk/return profiles; a facilitator advances the game
//! year-by-year, and the engine recomputes every balance from per-pool
//! realized outcomes. This crate is the core only: a presentation layer
//! calls the operations below and renders the plain data they return.
//!
//! ## Design Principles
//!
//! 1. **Injectable Randomness**: the resolver takes a [`RateSource`], so
//!    outcomes are reproducible from a seed or a scripted sequence.
//!
//! 2. **One Outcome Per Pool**: realized rates are resolved once per pool
//!    per year, never per player. Everyone in the same pool in the same
//!    year sees the identical rate.
//!
//! 3. **Atomic Operations**: every public operation fully applies its state
//!    transition or fully rejects it with a [`GameError`].
//!
//! ## Modules
//!
//! - `core`: players, pools, randomness, errors
//! - `resolver`: per-year pool outcome resolution
//! - `session`: game session state machine, snapshots, leaderboard
//!
//! ## Example
//!
//! ```
//! use yield_clash::{GameRng, GameSession, PoolId};
//!
//! let mut session = GameSession::new();
//! let ana = session.add_player("Ana")?;
//! let bia = session.add_player("Bia")?;
//! session.set_max_years(3)?;
//! session.start_game()?;
//!
//! session.select_pool(ana, PoolId::A)?;
//! session.select_pool(bia, PoolId::C)?;
//!
//! let mut rng = GameRng::new(42);
//! let results = session.run_year(&mut rng)?;
//! assert_eq!(results.year, 1);
//!
//! let board = session.leaderboard();
//! assert_eq!(board[0].rank, 1);
//! # Ok::<(), yield_clash::GameError>(())
//! ```

pub mod core;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, Player, PlayerId, Pool, PoolId, RateSource, Result, ReturnProfile,
    ScriptedRates, YearRecord,
};

pub use crate::resolver::{resolve_year, PoolOutcomes};

pub use crate::session::{
    GameSession, LeaderboardEntry, Phase, PlayerResult, SessionConfig, YearResults,
    MAX_YEARS_CHOICES,
};
