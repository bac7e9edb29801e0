use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account_client::address::get_associated_token_address_with_program_id;

use jup_swap_program::helpers::{JUPITER_PROGRAM_ID, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID, VAULT_SEED};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(jup_swap_program::ID)
}

pub fn jupiter_program_id() -> Pubkey {
    Pubkey::new_from_array(JUPITER_PROGRAM_ID)
}

pub fn token_program_id() -> Pubkey {
    Pubkey::new_from_array(TOKEN_PROGRAM_ID)
}

pub fn token_2022_program_id() -> Pubkey {
    Pubkey::new_from_array(TOKEN_2022_PROGRAM_ID)
}

pub fn is_token_program(key: &Pubkey) -> bool {
    *key == token_program_id() || *key == token_2022_program_id()
}

/// The vault PDA and its bump.
pub fn vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], &program_id())
}

pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
