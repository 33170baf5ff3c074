use anchor_lang::prelude::*;
use arcade_model::{PrizeVault, MAX_NICKNAME_LEN};

use crate::error::ArcadeError;
use crate::state::{Arcade, ScoreEntry};

#[derive(Accounts)]
pub struct SubmitScore<'info> {
    #[account(mut)]
    pub arcade_account: Account<'info, Arcade>,

    /// The admin recording the score.
    pub admin: Signer<'info>,

    /// The scoring player's wallet.
    ///
    /// CHECK: only credited with the prize; must match the submitted
    /// entry's player.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Rank a finished game's score and, when it takes the top spot, sweep the
/// prize pool to the scorer.
///
/// Settlement and the leaderboard update share one transaction, so either
/// both commit or neither does.
pub fn submit_score_handler(ctx: Context<SubmitScore>, entry: ScoreEntry) -> Result<()> {
    let arcade = &mut ctx.accounts.arcade_account;
    arcade
        .admins
        .authorize(&ctx.accounts.admin.key())
        .map_err(ArcadeError::from)?;
    require!(
        entry.nickname.len() <= MAX_NICKNAME_LEN,
        ArcadeError::NicknameTooLong
    );
    require_keys_eq!(
        ctx.accounts.winner.key(),
        entry.player,
        ArcadeError::WinnerMismatch
    );

    let player = entry.player;
    let score = entry.score;
    let outcome = arcade.leaderboard.insert(entry);
    arcade.leaderboard.validate().map_err(ArcadeError::from)?;
    msg!(
        "arcade: score player={} score={} ranked={}",
        player,
        score,
        outcome.is_ranked()
    );

    if outcome.is_new_top() {
        let arcade_info = arcade.to_account_info();
        let reserve = Rent::get()?.minimum_balance(arcade_info.data_len());
        let mut vault = PrizeVault::new(reserve, arcade_info.lamports());
        if let Some(amount) = vault.settle() {
            let winner_info = ctx.accounts.winner.to_account_info();
            let (remaining, credited) =
                sweep_amounts(arcade_info.lamports(), winner_info.lamports(), amount)
                    .ok_or(ArcadeError::InsufficientFunds)?;
            **arcade_info.try_borrow_mut_lamports()? = remaining;
            **winner_info.try_borrow_mut_lamports()? = credited;
            arcade.total_distributed = arcade.total_distributed.saturating_add(amount);
            msg!("arcade: settled winner={} amount={}", player, amount);
        }
    }
    Ok(())
}

/// Post-settlement balances for the vault and the winner.
///
/// Returns `None` when the vault cannot cover `amount`.
pub(crate) fn sweep_amounts(
    vault_lamports: u64,
    winner_lamports: u64,
    amount: u64,
) -> Option<(u64, u64)> {
    let remaining = vault_lamports.checked_sub(amount)?;
    Some((remaining, winner_lamports.saturating_add(amount)))
}
