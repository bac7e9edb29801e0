use pinocchio::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;

use crate::helpers::{check_vault, next_account_info};

/// Fund the vault PDA so it stays rent exempt once it starts holding
/// lamports for route fees.
///
/// Accounts (exactly 3):
/// 0. `[writable, signer]` Payer
/// 1. `[writable]`         Vault PDA `[b"vault"]`
/// 2. `[]`                 System program
pub fn process_initialize(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    if !payload.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }

    let iter = &mut accounts.iter();
    let payer_info = next_account_info(iter)?;
    let vault_info = next_account_info(iter)?;
    let system_program_info = next_account_info(iter)?;

    if !payer_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    check_vault(vault_info)?;

    msg!("Greetings from:");
    pubkey::log(&crate::ID);
    msg!("Vault PDA:");
    pubkey::log(vault_info.key());

    let rent_exempt_minimum = Rent::get()?.minimum_balance(0);
    let shortfall = rent_exempt_minimum.saturating_sub(vault_info.lamports());
    if shortfall == 0 {
        // Already funded; repeat calls are a no-op
        return Ok(());
    }

    log!("Funding vault with {} lamports", shortfall);
    Transfer {
        from: payer_info,
        to: vault_info,
        lamports: shortfall,
    }
    .invoke()
}
