//! Program-wide constants.

/// Domain separator for the match pool record PDA.
pub const MATCH_POOL_SEED: &[u8] = b"match_pool";

/// Domain separator for the vault token account PDA.
pub const VAULT_SEED: &[u8] = b"pool_token";

/// A match id is used verbatim as a PDA seed, so it is capped at the
/// runtime's per-seed limit.
pub const MAX_MATCH_ID_LEN: usize = 32;

/// Max entries processed by a single `distribute_prizes` call. Each entry
/// costs one remaining account plus one transfer CPI.
///
/// Finalization is one-shot, so this is also the largest number of winners a
/// match can pay. Contests with more winners must not be run on one pool.
pub const MAX_PRIZE_DISTRIBUTIONS: usize = 16;
