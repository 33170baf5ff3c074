use anchor_lang::prelude::*;

use crate::error::ArcadeError;
use crate::state::Arcade;

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    #[account(mut)]
    pub arcade_account: Account<'info, Arcade>,

    pub admin: Signer<'info>,
}

pub fn update_price_handler(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
    let arcade = &mut ctx.accounts.arcade_account;
    arcade
        .admins
        .authorize(&ctx.accounts.admin.key())
        .map_err(ArcadeError::from)?;
    require!(new_price > 0, ArcadeError::InvalidPrice);

    arcade.price_per_game = new_price;
    msg!("arcade: price updated to {}", new_price);
    Ok(())
}
