use anchor_lang::prelude::*;

use crate::constants::MAX_MATCH_ID_LEN;
use crate::error::{MatchError, MatchResult};
use crate::utils::pda::validate_match_id;

/// Escrow record for one match, PDA of `[MATCH_POOL_SEED, match_id]`.
///
/// The record keeps aggregates only. Individual contributions are not stored;
/// they can be rebuilt from `DepositReceived` events.
#[account]
#[derive(Default)]
pub struct MatchPool {
    /// May end registration and distribute prizes. Never reassigned.
    pub authority: Pubkey,
    /// Token mint held by the vault.
    pub mint: Pubkey,
    /// Caller-chosen identifier, also the PDA seed.
    pub match_id: String,
    /// Unix seconds. Deposits are rejected once `now >= registration_end_time`.
    pub registration_end_time: i64,
    /// Sum of every accepted deposit.
    pub total_deposited: u64,
    /// Sum paid out by the finalizing distribution.
    pub total_distributed: u64,
    /// Cleared by `end_match` or by finalization; never set again.
    pub is_open: bool,
    pub is_finalized: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

impl MatchPool {
    pub const SIZE: usize =
        32 +                    // authority
        32 +                    // mint
        4 + MAX_MATCH_ID_LEN +  // match_id
        8 +                     // registration_end_time
        8 +                     // total_deposited
        8 +                     // total_distributed
        1 +                     // is_open
        1 +                     // is_finalized
        1 +                     // bump
        1;                      // vault_bump

    /// A freshly allocated account is zeroed, so the authority is the default key.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint: Pubkey,
        match_id: String,
        registration_end_time: i64,
        bump: u8,
        vault_bump: u8,
    ) -> MatchResult<()> {
        if self.is_initialized() {
            return Err(MatchError::AlreadyExists);
        }
        if authority == Pubkey::default() {
            return Err(MatchError::Unauthorized);
        }
        validate_match_id(&match_id)?;

        self.authority = authority;
        self.mint = mint;
        self.match_id = match_id;
        self.registration_end_time = registration_end_time;
        self.total_deposited = 0;
        self.total_distributed = 0;
        self.is_open = true;
        self.is_finalized = false;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// The single authorization predicate shared by every gated instruction.
    pub fn is_authority(&self, caller: &Pubkey) -> bool {
        self.is_initialized() && self.authority == *caller
    }

    fn ensure_authority(&self, caller: &Pubkey) -> MatchResult<()> {
        if self.is_authority(caller) {
            Ok(())
        } else {
            Err(MatchError::Unauthorized)
        }
    }

    /// Effective registration state: the stored flag gated by the deadline.
    pub fn is_open_at(&self, now: i64) -> bool {
        self.is_open && !self.is_finalized && now < self.registration_end_time
    }

    /// Validates a deposit and returns the running total it would produce.
    pub fn check_deposit(&self, amount: u64, now: i64) -> MatchResult<u64> {
        if amount == 0 {
            return Err(MatchError::InvalidAmount);
        }
        if self.is_finalized {
            return Err(MatchError::MatchAlreadyFinalized);
        }
        if !self.is_open_at(now) {
            return Err(MatchError::RegistrationClosed);
        }
        self.total_deposited
            .checked_add(amount)
            .ok_or(MatchError::MathOverflow)
    }

    /// Commits a deposit that already moved into the vault.
    pub fn credit_deposit(&mut self, amount: u64, now: i64) -> MatchResult<u64> {
        let total = self.check_deposit(amount, now)?;
        self.total_deposited = total;
        Ok(total)
    }

    /// Explicit `Open -> Closed`. No deadline constraint.
    pub fn end(&mut self, caller: &Pubkey) -> MatchResult<()> {
        self.ensure_authority(caller)?;
        if !self.is_open || self.is_finalized {
            return Err(MatchError::NotOpen);
        }
        self.is_open = false;
        Ok(())
    }

    /// Lifecycle gate for a payout. The window must be closed, explicitly
    /// or by deadline, so a still-growing pool is never paid out.
    pub fn check_distribution(&self, caller: &Pubkey, now: i64) -> MatchResult<()> {
        self.ensure_authority(caller)?;
        if self.is_finalized {
            return Err(MatchError::MatchAlreadyFinalized);
        }
        if self.is_open_at(now) {
            return Err(MatchError::MatchStillActive);
        }
        Ok(())
    }

    /// Last step of a successful distribution.
    pub fn finalize(&mut self, total_distributed: u64) -> MatchResult<()> {
        if self.is_finalized {
            return Err(MatchError::MatchAlreadyFinalized);
        }
        self.total_distributed = total_distributed;
        self.is_open = false;
        self.is_finalized = true;
        Ok(())
    }

    /// What the vault should hold if nothing outside this program touched it.
    pub fn expected_vault_balance(&self) -> MatchResult<u64> {
        self.total_deposited
            .checked_sub(self.total_distributed)
            .ok_or(MatchError::MathOverflow)
    }
}
