use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::ArcadeError;
use crate::state::Arcade;

#[derive(Accounts)]
pub struct Play<'info> {
    #[account(mut)]
    pub arcade_account: Account<'info, Arcade>,

    /// The player paying for one game.
    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn play_handler(ctx: Context<Play>) -> Result<()> {
    let price = ctx.accounts.arcade_account.price_per_game;
    require!(
        ctx.accounts.player.lamports() >= price,
        ArcadeError::InsufficientFunds
    );

    // The full price accrues to the arcade account, which doubles as the
    // prize vault.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.arcade_account.to_account_info(),
            },
        ),
        price,
    )?;

    let arcade = &mut ctx.accounts.arcade_account;
    arcade.game_counter = arcade.game_counter.saturating_add(1);
    msg!(
        "arcade: play player={} price={} games={}",
        ctx.accounts.player.key(),
        price,
        arcade.game_counter
    );
    Ok(())
}
