use anchor_lang::prelude::*;
use arcade_model::{AccessControl, Leaderboard, MAX_ADMINS, MAX_ARCADE_NAME_LEN, MAX_NICKNAME_LEN};

/// Seed prefix for deriving an arcade account from its founding admin.
pub const ARCADE_ACCOUNT_SEED: &[u8] = b"arcade_account";

/// On-chain entries rank players by their wallet address.
pub type ScoreEntry = arcade_model::ScoreEntry<Pubkey>;

/// One arcade instance.
///
/// The account's own lamports are the prize vault: every play accrues the
/// full price here, and a new high score sweeps everything above the
/// rent-exempt minimum to the scorer.
#[account]
#[derive(Debug)]
pub struct Arcade {
    /// Admins authorized for score submission and configuration.
    pub admins: AccessControl<Pubkey>,
    /// Display name.
    pub arcade_name: String,
    /// Price per play, in lamports.
    pub price_per_game: u64,
    /// Completed plays.
    pub game_counter: u64,
    /// Lifetime lamports paid out to high-score winners.
    pub total_distributed: u64,
    /// Bounded top-K leaderboard.
    pub leaderboard: Leaderboard<Pubkey>,
    /// PDA bump.
    pub bump: u8,
}

impl Arcade {
    /// Serialized size of one leaderboard entry at the nickname bound.
    pub const ENTRY_SPACE: usize = 8 + 32 + 4 + MAX_NICKNAME_LEN;

    /// Account size for a leaderboard of `max_top_scores` entries, with the
    /// admin list and name at their bounds.
    pub fn space(max_top_scores: u8) -> usize {
        8 // discriminator
            + 4 + MAX_ADMINS * 32 // admins
            + 4 + MAX_ARCADE_NAME_LEN // arcade_name
            + 8 // price_per_game
            + 8 // game_counter
            + 8 // total_distributed
            + 1 + 4 + usize::from(max_top_scores) * Self::ENTRY_SPACE // leaderboard
            + 1 // bump
    }
}
