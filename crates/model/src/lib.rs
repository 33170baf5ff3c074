#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Arcade Model
//!
//! Chain-agnostic state machine for a paid arcade: a fixed-capacity,
//! score-sorted leaderboard, a prize vault that sweeps its distributable
//! balance to each new top scorer, and the admin-gated operations tying
//! them together.
//!
//! The model is generic over the address type and takes its ledger
//! collaborator (balances, transfers, reserve floor) as an explicit
//! parameter, so it can be embedded on-chain or driven by an in-memory
//! ledger in tests. Solana serialization for the persistent types is
//! enabled with the `solana` feature.

/// Error type.
pub mod error;

/// Ranked score entries.
pub mod score;

/// Bounded top-K leaderboard.
pub mod leaderboard;

/// Prize vault accounting.
pub mod vault;

/// Admin set.
pub mod access;

/// Ledger collaborator.
pub mod ledger;

/// Arcade state machine.
pub mod arcade;

/// Test utilities.
#[cfg(feature = "test")]
pub mod testing;

pub use crate::{
    access::{AccessControl, MAX_ADMINS},
    arcade::{ArcadeState, MAX_ARCADE_NAME_LEN},
    error::Error,
    leaderboard::{InsertOutcome, Leaderboard},
    ledger::Ledger,
    score::{ScoreEntry, MAX_NICKNAME_LEN},
    vault::PrizeVault,
};

/// Alias for `Result` with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
