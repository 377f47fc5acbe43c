//! Game session: roster, phase progression, year resolution, leaderboard.
//!
//! ## State machine
//!
//! `Setup -> Active -> Finished`, derived from two fields: the `started`
//! flag and the year counter. Roster and settings are editable only during
//! setup; pool selection and year resolution only while active; `Finished`
//! is reached when the year counter hits the configured game length (or the
//! facilitator ends the game early).
//!
//! ## Atomicity
//!
//! Every operation validates its preconditions before touching state, so a
//! rejected call leaves the session exactly as it was. There are no
//! partially-applied year resolutions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{GameError, Result};
use crate::core::player::{Player, PlayerId, YearRecord};
use crate::core::pool::{Pool, PoolId};
use crate::core::rng::RateSource;
use crate::resolver::{resolve_year, PoolOutcomes};

/// Facilitator-selectable game lengths, in years.
pub const MAX_YEARS_CHOICES: [u32; 3] = [3, 4, 5];

/// Session configuration, locked once the game starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Balance every player starts (and resets) with.
    pub starting_balance: f64,
    /// Number of years the game runs.
    pub max_years: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1000.0,
            max_years: 5,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration (1000.0 balance, 5 years).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Set the game length.
    #[must_use]
    pub fn with_max_years(mut self, max_years: u32) -> Self {
        assert!(
            MAX_YEARS_CHOICES.contains(&max_years),
            "Game length must be one of {MAX_YEARS_CHOICES:?}"
        );
        self.max_years = max_years;
        self
    }
}

/// Game phase, derived from session state and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Roster and settings editable; no years run.
    Setup,
    /// Game in progress: players select pools, facilitator runs years.
    Active,
    /// All years resolved (or the game was ended early); leaderboard final.
    Finished,
}

/// One player's row in a resolved-year snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub name: String,
    /// `None` only when the year resolved without a selection.
    pub pool: Option<PoolId>,
    /// Realized rate in signed percent (5.0 means +5%).
    pub rate_percent: f64,
    pub gain: f64,
    pub new_balance: f64,
}

/// Immutable snapshot of the most recently resolved year.
///
/// Replaced, not accumulated, on each resolution; per-player history lives
/// on the players themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearResults {
    /// 1-based year that was just resolved.
    pub year: u32,
    /// One row per player, roster order.
    pub rows: Vec<PlayerResult>,
}

/// A leaderboard row. Derived on demand, never cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank by descending balance.
    pub rank: u32,
    pub player: PlayerId,
    pub name: String,
    pub balance: f64,
}

/// A running game session.
///
/// ## Example
///
/// ```
/// use yield_clash::core::{PoolId, ScriptedRates};
/// use yield_clash::session::GameSession;
///
/// let mut session = GameSession::new();
/// let ana = session.add_player("Ana").unwrap();
/// session.set_max_years(3).unwrap();
/// session.start_game().unwrap();
///
/// session.select_pool(ana, PoolId::A).unwrap();
/// let mut rates = ScriptedRates::new(vec![0.5]);
/// let results = session.run_year(&mut rates).unwrap();
/// assert_eq!(results.rows[0].new_balance, 1050.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    players: Vec<Player>,
    current_year: u32,
    started: bool,
    last_round_results: Option<YearResults>,
    next_player_id: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            current_year: 0,
            started: false,
            last_round_results: None,
            next_player_id: 0,
        }
    }

    // === Setup ===

    /// Add a player to the roster.
    ///
    /// The name is trimmed; empty or whitespace-only names are rejected.
    /// Only valid during setup.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        let name = validated_name(name)?;

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        self.players
            .push(Player::new(id, name, self.config.starting_balance));

        Ok(id)
    }

    /// Remove a player from the roster. Only valid during setup.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::UnknownPlayer(id))?;
        self.players.remove(index);
        Ok(())
    }

    /// Rename a player, with the same validation as [`GameSession::add_player`].
    /// Only valid during setup.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        let name = validated_name(name)?;
        self.player_mut(id)?.name = name;
        Ok(())
    }

    /// Set the game length. Only valid during setup, and only to one of
    /// [`MAX_YEARS_CHOICES`].
    pub fn set_max_years(&mut self, max_years: u32) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        if !MAX_YEARS_CHOICES.contains(&max_years) {
            return Err(GameError::InvalidMaxYears(max_years));
        }
        self.config.max_years = max_years;
        Ok(())
    }

    /// Start the game. Requires at least one player.
    pub fn start_game(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        self.started = true;
        self.current_year = 0;
        self.last_round_results = None;
        debug!(
            "game started: {} players, {} years",
            self.players.len(),
            self.config.max_years
        );
        Ok(())
    }

    // === Active ===

    /// Set a player's pending pool choice. May be changed repeatedly before
    /// the year runs. Only valid while the game is active.
    pub fn select_pool(&mut self, id: PlayerId, pool: PoolId) -> Result<()> {
        match self.phase() {
            Phase::Setup => return Err(GameError::GameNotStarted),
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::Active => {}
        }
        self.player_mut(id)?.pool_choice = Some(pool);
        Ok(())
    }

    /// Resolve one year.
    ///
    /// Preconditions: the game is active and every player has a pending
    /// pool choice. Resolves per-pool outcomes once, applies them to every
    /// player's balance, appends history records, clears choices, and
    /// advances the year counter by exactly one.
    pub fn run_year(&mut self, rates: &mut impl RateSource) -> Result<&YearResults> {
        match self.phase() {
            Phase::Setup => return Err(GameError::GameNotStarted),
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::Active => {}
        }
        if let Some(unselected) = self.players.iter().find(|p| !p.has_choice()) {
            return Err(GameError::PoolNotSelected {
                player: unselected.name.clone(),
            });
        }

        let outcomes = resolve_year(&Pool::catalog(), rates);
        let year = self.current_year + 1;

        let rows: Vec<PlayerResult> = self
            .players
            .iter()
            .map(|player| player_row(player, &outcomes))
            .collect();

        // Commit: balances, cleared choices, history, year counter
        for (player, row) in self.players.iter_mut().zip(&rows) {
            player.balance = row.new_balance;
            player.pool_choice = None;
            player.history.push_back(YearRecord {
                year,
                gain: row.gain,
                pool: row.pool,
            });
        }
        self.current_year = year;

        debug!("year {} resolved for {} players", year, rows.len());
        Ok(self.last_round_results.insert(YearResults { year, rows }))
    }

    /// End the game without resolving further years.
    ///
    /// Allowed only after at least one year has run and before the game is
    /// finished. Balances stay as the last resolved year left them.
    pub fn end_game_early(&mut self) -> Result<()> {
        match self.phase() {
            Phase::Setup => return Err(GameError::GameNotStarted),
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::Active => {}
        }
        if self.current_year == 0 {
            return Err(GameError::NoYearResolved);
        }

        debug!(
            "game ended early at year {} of {}",
            self.current_year, self.config.max_years
        );
        self.current_year = self.config.max_years;
        Ok(())
    }

    /// Return the session to setup: every balance back to the starting
    /// balance, choices and history cleared, year counter zeroed, snapshot
    /// discarded. Players are kept.
    pub fn reset_game(&mut self) {
        for player in &mut self.players {
            player.reset(self.config.starting_balance);
        }
        self.current_year = 0;
        self.started = false;
        self.last_round_results = None;
        debug!("game reset: {} players kept", self.players.len());
    }

    // === Queries ===

    /// Current phase, derived from the started flag and year counter.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Setup
        } else if self.current_year >= self.config.max_years {
            Phase::Finished
        } else {
            Phase::Active
        }
    }

    /// Years resolved so far.
    #[must_use]
    pub fn current_year(&self) -> u32 {
        self.current_year
    }

    /// Configured game length.
    #[must_use]
    pub fn max_years(&self) -> u32 {
        self.config.max_years
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The roster, in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether every player has a pending pool choice.
    ///
    /// An empty roster trivially satisfies this; `run_year` guards the
    /// zero-player case separately via the start precondition.
    #[must_use]
    pub fn all_players_selected(&self) -> bool {
        self.players.iter().all(Player::has_choice)
    }

    /// Snapshot of the most recently resolved year, if any.
    #[must_use]
    pub fn last_round_results(&self) -> Option<&YearResults> {
        self.last_round_results.as_ref()
    }

    /// The static pool catalog, for display.
    #[must_use]
    pub fn pools(&self) -> [Pool; 4] {
        Pool::catalog()
    }

    /// Players ranked by descending balance.
    ///
    /// Recomputed on every call. The sort is stable, so tied balances keep
    /// their roster insertion order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.balance.total_cmp(&a.balance));

        ranked
            .iter()
            .enumerate()
            .map(|(index, player)| LeaderboardEntry {
                rank: index as u32 + 1,
                player: player.id,
                name: player.name.clone(),
                balance: player.balance,
            })
            .collect()
    }

    /// The leaderboard head, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if self.phase() != Phase::Finished {
            return None;
        }
        self.leaderboard()
            .first()
            .and_then(|entry| self.player(entry.player))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GameError::UnknownPlayer(id))
    }
}

/// Build one player's snapshot row from the year's outcomes.
///
/// A player without a choice gets a zero-gain row with no pool label; the
/// session precondition makes this unreachable through the public API, but
/// the row builder stays total.
fn player_row(player: &Player, outcomes: &PoolOutcomes) -> PlayerResult {
    match player.pool_choice {
        Some(pool) => {
            let rate = outcomes.rate(pool).unwrap_or(0.0);
            let gain = player.balance * rate;
            PlayerResult {
                player: player.id,
                name: player.name.clone(),
                pool: Some(pool),
                rate_percent: rate * 100.0,
                gain,
                new_balance: player.balance + gain,
            }
        }
        None => PlayerResult {
            player: player.id,
            name: player.name.clone(),
            pool: None,
            rate_percent: 0.0,
            gain: 0.0,
            new_balance: player.balance,
        },
    }
}

fn validated_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptyPlayerName);
    }
    Ok(trimmed.to_string())
}
