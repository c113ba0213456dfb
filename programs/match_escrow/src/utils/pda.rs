//! Deterministic addressing for a match: both accounts are PDAs of the match
//! id under distinct domain separators, so no lookup table is needed.

use anchor_lang::prelude::*;

use crate::constants::{MATCH_POOL_SEED, MAX_MATCH_ID_LEN, VAULT_SEED};
use crate::error::{MatchError, MatchResult};

pub fn validate_match_id(match_id: &str) -> MatchResult<()> {
    if match_id.is_empty() || match_id.len() > MAX_MATCH_ID_LEN {
        return Err(MatchError::InvalidMatchId);
    }
    Ok(())
}

/// Address and bump of the `MatchPool` record for `match_id`.
pub fn match_pool_address(match_id: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MATCH_POOL_SEED, match_id.as_bytes()], &crate::ID)
}

/// Address and bump of the vault token account for `match_id`.
pub fn vault_address(match_id: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, match_id.as_bytes()], &crate::ID)
}
