use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{MATCH_POOL_SEED, VAULT_SEED};
use crate::error::MatchError;
use crate::state::MatchPool;
use crate::utils::payout::{distribution_digest, plan_payout, PrizeDistribution};

/// Pays the vault out to `prize_distributions` and finalizes the match.
///
/// Recipient token accounts are passed as remaining accounts, one per entry,
/// in list order. Every entry and account is validated before the first
/// transfer, so a rejected call moves nothing.
pub fn process_distribute_prizes<'a, 'b, 'c, 'info>(
    ctx: Context<'a, 'b, 'c, 'info, DistributePrizes<'info>>,
    prize_distributions: Vec<PrizeDistribution>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &ctx.accounts.match_pool;
    pool.check_distribution(&ctx.accounts.authority.key(), now)?;

    let vault_balance = ctx.accounts.vault.amount;
    let total = plan_payout(vault_balance, &prize_distributions)?;

    let recipients = ctx.remaining_accounts;
    require!(
        recipients.len() == prize_distributions.len(),
        MatchError::RecipientAccountsMismatch
    );
    let vault_key = ctx.accounts.vault.key();
    for (prize, account) in prize_distributions.iter().zip(recipients.iter()) {
        check_recipient_account(account, prize, &pool.mint, &vault_key)?;
    }

    let match_id = pool.match_id.clone();
    let bump = pool.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[MATCH_POOL_SEED, match_id.as_bytes(), &[bump]]];

    let pool_info = ctx.accounts.match_pool.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let token_program_info = ctx.accounts.token_program.to_account_info();

    for (prize, account) in prize_distributions.iter().zip(recipients.iter()) {
        token::transfer(
            CpiContext::new_with_signer(
                token_program_info.clone(),
                Transfer {
                    from: vault_info.clone(),
                    to: account.clone(),
                    authority: pool_info.clone(),
                },
                signer_seeds,
            ),
            prize.amount,
        )
        .map_err(|e| {
            msg!("Prize transfer to {} rejected: {:?}", prize.user, e);
            error!(MatchError::TransferFailed)
        })?;

        emit!(PrizeDistributed {
            match_id: match_id.clone(),
            user: prize.user,
            token_account: *account.key,
            amount: prize.amount,
        });
    }

    ctx.accounts.vault.reload()?;
    let residual = vault_balance
        .checked_sub(total)
        .ok_or(MatchError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount == residual,
        MatchError::VaultBalanceMismatch
    );

    let pool = &mut ctx.accounts.match_pool;
    pool.finalize(total)?;

    if residual > 0 {
        msg!("Match {} finalized with {} left in the vault", match_id, residual);
    }

    emit!(MatchFinalized {
        digest: distribution_digest(&match_id, &prize_distributions),
        match_id,
        recipients: prize_distributions.len() as u32,
        total_distributed: total,
        total_deposited: pool.total_deposited,
        residual,
    });

    Ok(())
}

fn check_recipient_account(
    account: &AccountInfo,
    prize: &PrizeDistribution,
    mint: &Pubkey,
    vault: &Pubkey,
) -> Result<()> {
    require_keys_eq!(*account.owner, token::ID, MatchError::InvalidTokenAccount);
    require_keys_neq!(*account.key, *vault, MatchError::RecipientAccountsMismatch);

    let data = account.try_borrow_data()?;
    let token_account = TokenAccount::try_deserialize(&mut &data[..])
        .map_err(|_| error!(MatchError::InvalidTokenAccount))?;

    require_keys_eq!(token_account.mint, *mint, MatchError::InvalidTokenMint);
    require_keys_eq!(
        token_account.owner,
        prize.user,
        MatchError::RecipientAccountsMismatch
    );
    require!(!token_account.is_frozen(), MatchError::TransferFailed);
    Ok(())
}

#[derive(Accounts)]
pub struct DistributePrizes<'info> {
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

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PrizeDistributed {
    pub match_id: String,
    pub user: Pubkey,
    pub token_account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct MatchFinalized {
    pub match_id: String,
    pub recipients: u32,
    pub total_distributed: u64,
    pub total_deposited: u64,
    /// Left in the vault when the list did not cover the full balance.
    pub residual: u64,
    /// BLAKE3 of the ordered payout list, see `utils::payout::distribution_digest`.
    pub digest: [u8; 32],
}
