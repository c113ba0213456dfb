use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{MATCH_POOL_SEED, VAULT_SEED};
use crate::error::MatchError;
use crate::state::MatchPool;

pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &ctx.accounts.match_pool;
    pool.check_deposit(amount, now)?;

    check_depositor_account(
        &ctx.accounts.depositor_token_account,
        &ctx.accounts.depositor.key(),
        &pool.mint,
        amount,
    )?;

    let pre = ctx.accounts.vault.amount;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|e| {
        msg!("Deposit transfer rejected: {:?}", e);
        error!(MatchError::TransferFailed)
    })?;

    ctx.accounts.vault.reload()?;
    let expected = pre.checked_add(amount).ok_or(MatchError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount == expected,
        MatchError::VaultBalanceMismatch
    );

    let pool = &mut ctx.accounts.match_pool;
    let total_deposited = pool.credit_deposit(amount, now)?;

    emit!(DepositReceived {
        match_id: pool.match_id.clone(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        total_deposited,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

/// The source must be the signer's unfrozen account of the pool mint and
/// cover `amount`, so a ledger refusal is reported before any CPI.
fn check_depositor_account(
    source: &TokenAccount,
    depositor: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(source.mint, *mint, MatchError::InvalidTokenMint);
    require_keys_eq!(source.owner, *depositor, MatchError::InvalidTokenAccount);
    require!(!source.is_frozen(), MatchError::TransferFailed);
    require!(source.amount >= amount, MatchError::TransferFailed);
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [MATCH_POOL_SEED, match_pool.match_id.as_bytes()],
        bump = match_pool.bump,
    )]
    pub match_pool: Account<'info, MatchPool>,

    #[account(
        mut,
        seeds = [VAULT_SEED, match_pool.match_id.as_bytes()],
        bump = match_pool.vault_bump,
        constraint = vault.mint == match_pool.mint @ MatchError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// One event per accepted deposit; the only per-depositor record kept.
#[event]
pub struct DepositReceived {
    pub match_id: String,
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub vault_balance: u64,
}
