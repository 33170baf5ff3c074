use anchor_lang::prelude::*;
use arcade_model::{AccessControl, Leaderboard, MAX_ARCADE_NAME_LEN};

use crate::error::ArcadeError;
use crate::state::{Arcade, ARCADE_ACCOUNT_SEED};

#[derive(Accounts)]
#[instruction(arcade_name: String, max_top_scores: u8, price_per_game: u64)]
pub struct Initialize<'info> {
    /// The arcade account, derived from the founding admin.
    #[account(
        init,
        payer = admin,
        seeds = [ARCADE_ACCOUNT_SEED, admin.key().as_ref()],
        bump,
        space = Arcade::space(max_top_scores),
    )]
    pub arcade_account: Account<'info, Arcade>,

    /// The founding admin, paying for the account.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    arcade_name: String,
    max_top_scores: u8,
    price_per_game: u64,
) -> Result<()> {
    require!(
        arcade_name.len() <= MAX_ARCADE_NAME_LEN,
        ArcadeError::ArcadeNameTooLong
    );
    require!(price_per_game > 0, ArcadeError::InvalidPrice);

    let arcade = &mut ctx.accounts.arcade_account;
    arcade.admins = AccessControl::new(ctx.accounts.admin.key());
    arcade.arcade_name = arcade_name;
    arcade.price_per_game = price_per_game;
    arcade.game_counter = 0;
    arcade.total_distributed = 0;
    arcade.leaderboard = Leaderboard::new(max_top_scores).map_err(ArcadeError::from)?;
    arcade.bump = ctx.bumps.arcade_account;

    msg!(
        "arcade: initialized name={} capacity={} price={}",
        arcade.arcade_name,
        max_top_scores,
        price_per_game
    );
    Ok(())
}
