use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{try_find_program_address, Pubkey},
};

use crate::error::{to_program_error, SwapError};
use crate::helpers::constant::*;
use crate::state::TokenAccountView;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

/// Derive the vault PDA and its bump for `program_id`.
#[inline]
pub fn find_vault(program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    try_find_program_address(&[VAULT_SEED], program_id)
        .ok_or_else(|| to_program_error(SwapError::InvalidVault))
}

/// Check that `vault_info` is the vault PDA and return its bump.
pub fn check_vault(vault_info: &AccountInfo) -> Result<u8, ProgramError> {
    let (vault, bump) = find_vault(&crate::ID)?;
    if vault_info.key() != &vault {
        return Err(to_program_error(SwapError::InvalidVault));
    }
    if !vault_info.is_writable() {
        return Err(to_program_error(SwapError::InvalidVault));
    }
    Ok(bump)
}

#[inline]
pub fn is_token_program(key: &Pubkey) -> bool {
    *key == TOKEN_PROGRAM_ID || *key == TOKEN_2022_PROGRAM_ID
}

pub fn check_token_program(token_program_info: &AccountInfo) -> Result<(), ProgramError> {
    if !is_token_program(token_program_info.key()) {
        return Err(to_program_error(SwapError::InvalidTokenProgram));
    }
    Ok(())
}

pub fn check_mint(mint_info: &AccountInfo, token_program: &Pubkey) -> Result<(), ProgramError> {
    if !mint_info.is_owned_by(token_program) {
        return Err(to_program_error(SwapError::InvalidMint));
    }
    // decimals is read later; reject anything that does not parse as a mint now
    crate::state::MintView::decimals_of(mint_info)
        .map_err(|_| to_program_error(SwapError::InvalidMint))?;
    Ok(())
}

pub fn associated_token_address(
    authority: &Pubkey,
    token_program: &Pubkey,
    mint: &Pubkey,
) -> Option<Pubkey> {
    try_find_program_address(
        &[authority.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _)| address)
}

/// Check that `token_account_info` is the associated token account of
/// `authority` for `mint` under `token_program`.
pub fn check_associated_token_account(
    token_account_info: &AccountInfo,
    mint: &Pubkey,
    authority: &Pubkey,
    token_program: &Pubkey,
) -> Result<(), ProgramError> {
    let invalid = || to_program_error(SwapError::InvalidTokenAccount);

    if !token_account_info.is_owned_by(token_program) {
        return Err(invalid());
    }
    if !token_account_info.is_writable() {
        return Err(invalid());
    }
    let expected = associated_token_address(authority, token_program, mint).ok_or_else(invalid)?;
    if token_account_info.key() != &expected {
        return Err(invalid());
    }

    let data = token_account_info.try_borrow_data()?;
    let view = TokenAccountView::parse(&data).map_err(|_| invalid())?;
    if view.mint() != mint || view.owner() != authority {
        return Err(invalid());
    }
    Ok(())
}
