use anchor_lang::prelude::*;

use crate::error::ArcadeError;
use crate::state::Arcade;

#[derive(Accounts)]
pub struct ModifyAdmins<'info> {
    #[account(mut)]
    pub arcade_account: Account<'info, Arcade>,

    pub admin: Signer<'info>,
}

/// Register another admin. Idempotent: re-adding an existing admin is a
/// no-op.
pub fn add_admin_handler(ctx: Context<ModifyAdmins>, new_admin: Pubkey) -> Result<()> {
    let arcade = &mut ctx.accounts.arcade_account;
    let caller = ctx.accounts.admin.key();
    arcade.admins.authorize(&caller).map_err(ArcadeError::from)?;
    arcade.admins.add(new_admin).map_err(ArcadeError::from)?;
    msg!("arcade: admin added {}", new_admin);
    Ok(())
}

/// Remove the calling admin. The last admin cannot leave, so the arcade
/// never becomes unrecoverable.
pub fn remove_admin_handler(ctx: Context<ModifyAdmins>) -> Result<()> {
    let arcade = &mut ctx.accounts.arcade_account;
    let caller = ctx.accounts.admin.key();
    arcade.admins.remove(&caller).map_err(ArcadeError::from)?;
    msg!("arcade: admin removed {}", caller);
    Ok(())
}
