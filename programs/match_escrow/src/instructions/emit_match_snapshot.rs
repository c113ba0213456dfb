use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{MATCH_POOL_SEED, VAULT_SEED};
use crate::state::MatchPool;

/// Read-only: emits the full record, the live vault balance and the
/// deadline-aware open flag. Anyone may call it.
pub fn process_emit_match_snapshot(ctx: Context<EmitMatchSnapshot>) -> Result<()> {
    let pool = &ctx.accounts.match_pool;
    let now = Clock::get()?.unix_timestamp;

    emit!(MatchSnapshot {
        match_id: pool.match_id.clone(),
        authority: pool.authority,
        mint: pool.mint,
        registration_end_time: pool.registration_end_time,
        total_deposited: pool.total_deposited,
        total_distributed: pool.total_distributed,
        is_open: pool.is_open_at(now),
        is_finalized: pool.is_finalized,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitMatchSnapshot<'info> {
    #[account(
        seeds = [MATCH_POOL_SEED, match_pool.match_id.as_bytes()],
        bump = match_pool.bump,
    )]
    pub match_pool: Account<'info, MatchPool>,

    #[account(
        seeds = [VAULT_SEED, match_pool.match_id.as_bytes()],
        bump = match_pool.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct MatchSnapshot {
    pub match_id: String,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub registration_end_time: i64,
    pub total_deposited: u64,
    pub total_distributed: u64,
    pub is_open: bool,
    pub is_finalized: bool,
    pub vault_balance: u64,
}
