//! Pre-flight validation for a prize distribution.
//!
//! The list is untrusted caller input. It is checked only against the vault
//! balance, since the pool record keeps no roster: every amount must be
//! positive and the checked sum must fit in the vault. The transfer loop
//! runs only after this pass succeeds.

use anchor_lang::prelude::*;

use crate::constants::MAX_PRIZE_DISTRIBUTIONS;
use crate::error::{MatchError, MatchResult};

/// One payout: `amount` base units to the token account owned by `user`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeDistribution {
    pub user: Pubkey,
    pub amount: u64,
}

/// Returns the total to be paid, or why the list cannot be paid from a vault
/// holding `vault_balance`.
pub fn plan_payout(vault_balance: u64, distributions: &[PrizeDistribution]) -> MatchResult<u64> {
    if distributions.is_empty() {
        return Err(MatchError::EmptyDistribution);
    }
    if distributions.len() > MAX_PRIZE_DISTRIBUTIONS {
        return Err(MatchError::TooManyDistributions);
    }

    let mut total: u64 = 0;
    for d in distributions {
        if d.amount == 0 {
            return Err(MatchError::InvalidAmount);
        }
        total = total
            .checked_add(d.amount)
            .ok_or(MatchError::MathOverflow)?;
    }

    if total > vault_balance {
        return Err(MatchError::InsufficientVaultBalance);
    }
    Ok(total)
}

/// BLAKE3 digest binding a match id to the exact ordered payout list.
pub fn distribution_digest(match_id: &str, distributions: &[PrizeDistribution]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(match_id.as_bytes());
    hasher.update(&(distributions.len() as u32).to_le_bytes());
    for d in distributions {
        hasher.update(d.user.as_ref());
        hasher.update(&d.amount.to_le_bytes());
    }
    *hasher.finalize().as_bytes()
}
