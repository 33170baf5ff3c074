/// Error type shared by the arcade state machine and its embeddings.
///
/// Every operation either commits all of its postconditions or fails with
/// exactly one of these variants and no observable state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An arcade already exists at the derived address.
    #[error("arcade already initialized")]
    AlreadyInitialized,
    /// Caller is not a registered admin.
    #[error("caller is not an admin")]
    Unauthorized,
    /// Price per game must be positive.
    #[error("price per game must be positive")]
    InvalidPrice,
    /// Leaderboard capacity must be at least one.
    #[error("leaderboard capacity must be at least one")]
    InvalidCapacity,
    /// Payer cannot cover the price per game.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Removing the caller would leave the arcade without admins.
    #[error("cannot remove the last admin")]
    CannotRemoveLastAdmin,
    /// Nickname exceeds [`MAX_NICKNAME_LEN`](crate::MAX_NICKNAME_LEN).
    #[error("nickname too long")]
    NicknameTooLong,
    /// Arcade name exceeds [`MAX_ARCADE_NAME_LEN`](crate::MAX_ARCADE_NAME_LEN).
    #[error("arcade name too long")]
    ArcadeNameTooLong,
    /// Admin set already holds [`MAX_ADMINS`](crate::MAX_ADMINS) entries.
    #[error("admin set is full")]
    TooManyAdmins,
    /// The leaderboard broke its capacity or ordering invariant.
    ///
    /// Internal assertion; not reachable through the public operations.
    #[error("leaderboard capacity invariant violated")]
    CapacityInvariantViolation,
}
