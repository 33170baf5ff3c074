use anchor_lang::prelude::*;

#[error_code]
pub enum ArcadeError {
    #[msg("Arcade already initialized")]
    AlreadyInitialized,

    #[msg("Caller is not an admin")]
    Unauthorized,

    #[msg("Price per game must be positive")]
    InvalidPrice,

    #[msg("Leaderboard capacity must be at least one")]
    InvalidCapacity,

    #[msg("Insufficient funds to play")]
    InsufficientFunds,

    #[msg("Cannot remove the last admin")]
    CannotRemoveLastAdmin,

    #[msg("Nickname is too long")]
    NicknameTooLong,

    #[msg("Arcade name is too long")]
    ArcadeNameTooLong,

    #[msg("Admin set is full")]
    TooManyAdmins,

    #[msg("Winner account does not match the ranked entry")]
    WinnerMismatch,

    #[msg("Leaderboard capacity invariant violated")]
    CapacityInvariantViolation,
}

impl From<arcade_model::Error> for ArcadeError {
    fn from(err: arcade_model::Error) -> Self {
        use arcade_model::Error;

        match err {
            Error::AlreadyInitialized => Self::AlreadyInitialized,
            Error::Unauthorized => Self::Unauthorized,
            Error::InvalidPrice => Self::InvalidPrice,
            Error::InvalidCapacity => Self::InvalidCapacity,
            Error::InsufficientFunds => Self::InsufficientFunds,
            Error::CannotRemoveLastAdmin => Self::CannotRemoveLastAdmin,
            Error::NicknameTooLong => Self::NicknameTooLong,
            Error::ArcadeNameTooLong => Self::ArcadeNameTooLong,
            Error::TooManyAdmins => Self::TooManyAdmins,
            Error::CapacityInvariantViolation => Self::CapacityInvariantViolation,
        }
    }
}
