use anchor_lang::prelude::*;

use crate::state::Arcade;

/// Borrow-only context shared by the read-only queries.
#[derive(Accounts)]
pub struct ViewArcade<'info> {
    pub arcade_account: Account<'info, Arcade>,
}
