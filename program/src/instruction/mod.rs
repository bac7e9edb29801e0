use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::helpers::{INITIALIZE_DISCRIMINATOR, SWAP_DISCRIMINATOR};

pub mod initialize;
pub mod swap;

pub use initialize::*;
pub use swap::*;

/// Instructions dispatched on the 8-byte Anchor discriminator.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum SwapInstruction {
    /// Fund the vault PDA up to its rent-exempt minimum.
    #[account(0, writable, signer, name = "payer", desc = "Funds the vault top-up")]
    #[account(1, writable, name = "vault", desc = "Vault PDA [b\"vault\"]")]
    #[account(2, name = "system_program", desc = "System program")]
    Initialize,

    /// Route a swap through Jupiter from the vault, then forward `amount`
    /// output tokens to the recipient.
    #[account(0, name = "input_mint", desc = "Mint sold by the vault")]
    #[account(1, name = "input_mint_token_program", desc = "Token program of the input mint")]
    #[account(2, name = "output_mint", desc = "Mint bought by the vault")]
    #[account(3, name = "output_mint_token_program", desc = "Token program of the output mint")]
    #[account(4, writable, name = "vault", desc = "Vault PDA [b\"vault\"]")]
    #[account(5, writable, name = "vault_input_token_account", desc = "Vault ATA for the input mint")]
    #[account(6, writable, name = "vault_output_token_account", desc = "Vault ATA for the output mint")]
    #[account(7, writable, name = "recipient_token_account", desc = "Recipient ATA for the output mint")]
    #[account(8, name = "recipient", desc = "Recipient wallet")]
    #[account(9, name = "jupiter_program", desc = "Jupiter aggregator v6")]
    Swap,
}

impl TryFrom<&[u8]> for SwapInstruction {
    type Error = ProgramError;

    fn try_from(discriminator: &[u8]) -> Result<Self, Self::Error> {
        if discriminator == INITIALIZE_DISCRIMINATOR {
            Ok(SwapInstruction::Initialize)
        } else if discriminator == SWAP_DISCRIMINATOR {
            Ok(SwapInstruction::Swap)
        } else {
            Err(ProgramError::InvalidInstructionData)
        }
    }
}

/// Split instruction data into its discriminator and payload.
pub fn split_discriminator(data: &[u8]) -> Result<(SwapInstruction, &[u8]), ProgramError> {
    if data.len() < 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (disc, payload) = data.split_at(8);
    Ok((SwapInstruction::try_from(disc)?, payload))
}
