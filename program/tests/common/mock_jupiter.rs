//! Native stand-in for the Jupiter aggregator.
//!
//! Accounts:
//! 0. `[signer]`   user (the vault)
//! 1. `[writable]` user input token account
//! 2. `[writable]` pool input token account
//! 3. `[writable]` pool output token account
//! 4. `[writable]` user output token account
//! 5. `[]`         pool authority PDA `[b"pool"]`
//! 6. `[]`         input mint token program
//! 7. `[]`         output mint token program
//!
//! Data: `in_amount: u64 LE | out_amount: u64 LE`.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use spl_token::instruction::TokenInstruction;

pub const POOL_SEED: &[u8] = b"pool";

pub fn pool_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

pub fn route_data(in_amount: u64, out_amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&in_amount.to_le_bytes());
    data.extend_from_slice(&out_amount.to_le_bytes());
    data
}

// Plain `Transfer` has the same encoding under SPL Token and Token-2022, unlike
// `spl_token::instruction::transfer`, which only accepts the SPL Token id.
fn transfer(token_program: &Pubkey, from: &Pubkey, to: &Pubkey, authority: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*from, false),
            AccountMeta::new(*to, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data: TokenInstruction::Transfer { amount }.pack(),
    }
}

pub fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if data.len() != 16 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let in_amount = u64::from_le_bytes(data[..8].try_into().unwrap());
    let out_amount = u64::from_le_bytes(data[8..].try_into().unwrap());

    let iter = &mut accounts.iter();
    let user = next_account_info(iter)?;
    let user_input = next_account_info(iter)?;
    let pool_input = next_account_info(iter)?;
    let pool_output = next_account_info(iter)?;
    let user_output = next_account_info(iter)?;
    let pool = next_account_info(iter)?;
    let input_token_program = next_account_info(iter)?;
    let output_token_program = next_account_info(iter)?;

    if !user.is_signer {
        msg!("mock jupiter: user must sign");
        return Err(ProgramError::MissingRequiredSignature);
    }
    let (expected_pool, bump) = pool_authority(program_id);
    if pool.key != &expected_pool {
        return Err(ProgramError::InvalidSeeds);
    }

    invoke(
        &transfer(input_token_program.key, user_input.key, pool_input.key, user.key, in_amount),
        &[user_input.clone(), pool_input.clone(), user.clone(), input_token_program.clone()],
    )?;

    invoke_signed(
        &transfer(output_token_program.key, pool_output.key, user_output.key, pool.key, out_amount),
        &[pool_output.clone(), user_output.clone(), pool.clone(), output_token_program.clone()],
        &[&[POOL_SEED, &[bump]]],
    )?;

    msg!("mock jupiter: swapped");
    Ok(())
}
