use crate::instruction::{self, split_discriminator, SwapArgs, SwapInstruction};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Anchor-compatible 8-byte discriminator + Borsh payload
    let (ix, payload) = split_discriminator(instruction_data)?;

    match ix {
        SwapInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(accounts, payload)
        }
        SwapInstruction::Swap => {
            msg!("Instruction: Swap");
            let args = SwapArgs::parse(payload)?;
            instruction::swap::process_swap(accounts, args)
        }
    }
}
