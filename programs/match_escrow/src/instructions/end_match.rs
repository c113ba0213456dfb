use anchor_lang::prelude::*;

use crate::constants::MATCH_POOL_SEED;
use crate::state::MatchPool;

pub fn process_end_match(ctx: Context<EndMatch>) -> Result<()> {
    let pool = &mut ctx.accounts.match_pool;
    pool.end(&ctx.accounts.authority.key())?;

    emit!(MatchEnded {
        match_id: pool.match_id.clone(),
        total_deposited: pool.total_deposited,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EndMatch<'info> {
    #[account(
        mut,
        seeds = [MATCH_POOL_SEED, match_pool.match_id.as_bytes()],
        bump = match_pool.bump,
    )]
    pub match_pool: Account<'info, MatchPool>,

    pub authority: Signer<'info>,
}

#[event]
pub struct MatchEnded {
    pub match_id: String,
    pub total_deposited: u64,
}
