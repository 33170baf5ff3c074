use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("4vvLSqVKUwLigvkF6rtGsi7X6k5nCidb2gvbudhoKHvL");

#[program]
pub mod arcade_rewards {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        arcade_name: String,
        max_top_scores: u8,
        price_per_game: u64,
    ) -> Result<()> {
        instructions::initialize_handler(ctx, arcade_name, max_top_scores, price_per_game)
    }

    pub fn play(ctx: Context<Play>) -> Result<()> {
        instructions::play_handler(ctx)
    }

    pub fn submit_score(ctx: Context<SubmitScore>, entry: ScoreEntry) -> Result<()> {
        instructions::submit_score_handler(ctx, entry)
    }

    pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
        instructions::update_price_handler(ctx, new_price)
    }

    pub fn add_admin(ctx: Context<ModifyAdmins>, new_admin: Pubkey) -> Result<()> {
        instructions::add_admin_handler(ctx, new_admin)
    }

    pub fn remove_admin(ctx: Context<ModifyAdmins>) -> Result<()> {
        instructions::remove_admin_handler(ctx)
    }

    pub fn get_total_distributed(ctx: Context<ViewArcade>) -> Result<u64> {
        Ok(ctx.accounts.arcade_account.total_distributed)
    }

    pub fn get_top_scores(ctx: Context<ViewArcade>) -> Result<Vec<ScoreEntry>> {
        Ok(ctx.accounts.arcade_account.leaderboard.entries().to_vec())
    }

    pub fn get_game_counter(ctx: Context<ViewArcade>) -> Result<u64> {
        Ok(ctx.accounts.arcade_account.game_counter)
    }

    pub fn get_price_per_game(ctx: Context<ViewArcade>) -> Result<u64> {
        Ok(ctx.accounts.arcade_account.price_per_game)
    }
}
