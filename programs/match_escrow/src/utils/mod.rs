pub mod payout;
pub mod pda;

#[cfg(test)]
pub(crate) mod token_fixtures;
