use crate::Error;

/// Maximum nickname length in bytes.
pub const MAX_NICKNAME_LEN: usize = 32;

/// A single ranked record on the leaderboard.
///
/// Entries are immutable once ranked; a better result for the same player
/// is submitted as a fresh entry, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "solana",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
pub struct ScoreEntry<A> {
    /// Achieved score.
    pub score: u64,
    /// Identity of the player who achieved it.
    pub player: A,
    /// Display name, at most [`MAX_NICKNAME_LEN`] bytes.
    pub nickname: String,
}

impl<A> ScoreEntry<A> {
    /// Create a new entry, validating the nickname bound.
    pub fn new(score: u64, player: A, nickname: impl Into<String>) -> crate::Result<Self> {
        let nickname = nickname.into();
        if nickname.len() > MAX_NICKNAME_LEN {
            return Err(Error::NicknameTooLong);
        }
        Ok(Self {
            score,
            player,
            nickname,
        })
    }
}
