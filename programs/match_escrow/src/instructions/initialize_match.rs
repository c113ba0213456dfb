use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MATCH_POOL_SEED, VAULT_SEED};
use crate::error::MatchError;
use crate::state::MatchPool;

pub fn process_initialize_match(
    ctx: Context<InitializeMatch>,
    match_id: String,
    registration_end_time: i64,
) -> Result<()> {
    let pool = &mut ctx.accounts.match_pool;
    // An existing record is already refused by the account constraint.
    pool.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        match_id,
        registration_end_time,
        ctx.bumps.match_pool,
        ctx.bumps.vault,
    )?;

    msg!("Match pool {} opened until {}", pool.match_id, registration_end_time);

    emit!(MatchInitialized {
        match_id: pool.match_id.clone(),
        authority: pool.authority,
        mint: pool.mint,
        vault: ctx.accounts.vault.key(),
        registration_end_time,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(match_id: String)]
pub struct InitializeMatch<'info> {
    // Field constraints run before the vault's existing-account checks, so a
    // reused match id reports AlreadyExists whatever mint is passed.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + MatchPool::SIZE,
        seeds = [MATCH_POOL_SEED, match_id.as_bytes()],
        bump,
        constraint = !match_pool.is_initialized() @ MatchError::AlreadyExists,
    )]
    pub match_pool: Box<Account<'info, MatchPool>>,

    #[account(
        init_if_needed,
        payer = authority,
        token::mint = mint,
        token::authority = match_pool,
        seeds = [VAULT_SEED, match_id.as_bytes()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct MatchInitialized {
    pub match_id: String,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub registration_end_time: i64,
}
