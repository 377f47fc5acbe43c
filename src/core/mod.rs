//! Core types: players, pools, randomness, errors.
//!
//! This module contains the fundamental building blocks. The session and
//! resolver build on these; presentation layers consume them as plain data.

pub mod error;
pub mod player;
pub mod pool;
pub mod rng;

pub use error::{GameError, Result};
pub use player::{Player, PlayerId, YearRecord};
pub use pool::{Pool, PoolId, ReturnProfile};
pub use rng::{GameRng, RateSource, ScriptedRates};
