//! Packed SPL token accounts for exercising handler-side account checks.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

/// Byte image of an initialized SPL token account (165 bytes) with no
/// delegate, not native and no close authority.
pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64, frozen: bool) -> Vec<u8> {
    let mut data = Vec::with_capacity(165);
    data.extend_from_slice(mint.as_ref());
    data.extend_from_slice(owner.as_ref());
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&[0u8; 36]); // delegate
    data.push(if frozen { 2 } else { 1 }); // AccountState
    data.extend_from_slice(&[0u8; 12]); // is_native
    data.extend_from_slice(&0u64.to_le_bytes()); // delegated_amount
    data.extend_from_slice(&[0u8; 36]); // close_authority
    data
}

pub fn token_account(mint: &Pubkey, owner: &Pubkey, amount: u64, frozen: bool) -> TokenAccount {
    let data = token_account_data(mint, owner, amount, frozen);
    TokenAccount::try_deserialize(&mut &data[..]).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_matches_the_token_layout() {
        let (mint, owner) = (Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(token_account_data(&mint, &owner, 7, false).len(), 165);
        let account = token_account(&mint, &owner, 7, true);
        assert_eq!(account.mint, mint);
        assert_eq!(account.owner, owner);
        assert_eq!(account.amount, 7);
        assert!(account.is_frozen());
    }
}
