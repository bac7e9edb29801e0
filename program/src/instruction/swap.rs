use alloc::vec::Vec;
use pinocchio::{
    account_info::AccountInfo,
    cpi::slice_invoke_signed,
    instruction::{AccountMeta, Instruction, Seed, Signer},
    msg,
    program_error::ProgramError,
    pubkey, ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::{to_program_error, SwapError},
    helpers::*,
    state::{MintView, TokenAccountView},
};

/// Borsh-shaped payload of the swap instruction:
/// `u32 LE length | routed instruction data | u64 LE amount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapArgs<'a> {
    /// Instruction data forwarded verbatim to the aggregator.
    pub data: &'a [u8],
    /// Output tokens forwarded to the recipient after the swap.
    pub amount: u64,
}

impl<'a> SwapArgs<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        if payload.len() < 4 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (len_bytes, rest) = payload.split_at(4);
        let data_len = u32::from_le_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as usize;

        // exact fit: routed data followed by the amount, nothing trailing
        if rest.len() != data_len.checked_add(8).ok_or(ProgramError::InvalidInstructionData)? {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (data, amount_bytes) = rest.split_at(data_len);
        let mut buf = [0u8; 8];
        buf.copy_from_slice(amount_bytes);

        Ok(Self {
            data,
            amount: u64::from_le_bytes(buf),
        })
    }
}

/// Swap through Jupiter with the vault as the signing user, then forward
/// `amount` of the output mint to the recipient.
///
/// Accounts:
/// 0. `[]`         Input mint
/// 1. `[]`         Input mint token program
/// 2. `[]`         Output mint
/// 3. `[]`         Output mint token program
/// 4. `[writable]` Vault PDA
/// 5. `[writable]` Vault input token account
/// 6. `[writable]` Vault output token account
/// 7. `[writable]` Recipient token account
/// 8. `[]`         Recipient
/// 9. `[]`         Jupiter program
/// 10.. route accounts from the aggregator's swap instruction
pub fn process_swap(accounts: &[AccountInfo], args: SwapArgs) -> ProgramResult {
    if accounts.len() < SWAP_FIXED_ACCOUNTS {
        return Err(ProgramError::NotEnoughAccountKeys);
    }
    let (fixed, route_accounts) = accounts.split_at(SWAP_FIXED_ACCOUNTS);
    let [
        input_mint,
        input_mint_token_program,
        output_mint,
        output_mint_token_program,
        vault,
        vault_input_token_account,
        vault_output_token_account,
        recipient_token_account,
        recipient,
        jupiter_program,
    ] = fixed
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if jupiter_program.key() != &JUPITER_PROGRAM_ID {
        return Err(to_program_error(SwapError::InvalidJupiterProgram));
    }
    let bump = check_vault(vault)?;

    check_token_program(input_mint_token_program)?;
    check_token_program(output_mint_token_program)?;
    check_mint(input_mint, input_mint_token_program.key())?;
    check_mint(output_mint, output_mint_token_program.key())?;

    check_associated_token_account(
        vault_input_token_account,
        input_mint.key(),
        vault.key(),
        input_mint_token_program.key(),
    )?;
    check_associated_token_account(
        vault_output_token_account,
        output_mint.key(),
        vault.key(),
        output_mint_token_program.key(),
    )?;
    check_associated_token_account(
        recipient_token_account,
        output_mint.key(),
        recipient.key(),
        output_mint_token_program.key(),
    )?;

    if args.amount == 0 {
        return Err(to_program_error(SwapError::ZeroAmount));
    }
    if route_accounts.len() > MAX_ROUTE_ACCOUNTS {
        return Err(to_program_error(SwapError::TooManyRouteAccounts));
    }

    // The vault is the only signer the aggregator sees; every other flag is
    // taken from the account as passed to us.
    let route_metas: Vec<AccountMeta> = route_accounts
        .iter()
        .map(|account| {
            AccountMeta::new(
                account.key(),
                account.is_writable(),
                account.key() == vault.key(),
            )
        })
        .collect();
    let route_infos: Vec<&AccountInfo> = route_accounts.iter().collect();

    let bump_seed = [bump];
    let seeds = [Seed::from(VAULT_SEED), Seed::from(&bump_seed)];

    slice_invoke_signed(
        &Instruction {
            program_id: jupiter_program.key(),
            accounts: &route_metas,
            data: args.data,
        },
        &route_infos,
        &[Signer::from(&seeds)],
    )?;

    msg!("Transferring tokens...");
    msg!("Mint:");
    pubkey::log(output_mint.key());
    msg!("From Vault Output Token Account:");
    pubkey::log(vault_output_token_account.key());
    msg!("To Recipient Token Address:");
    pubkey::log(recipient_token_account.key());
    msg!("Vault PDA:");
    pubkey::log(vault.key());

    let available = TokenAccountView::amount_of(vault_output_token_account)?;
    if available < args.amount {
        log!("Vault holds {} but {} was requested", available, args.amount);
        return Err(to_program_error(SwapError::InsufficientOutput));
    }

    TransferChecked {
        from: vault_output_token_account,
        mint: output_mint,
        to: recipient_token_account,
        authority: vault,
        token_program: output_mint_token_program,
        amount: args.amount,
        decimals: MintView::decimals_of(output_mint)?,
    }
    .invoke_signed(&[Signer::from(&seeds)])?;

    msg!("Tokens transferred successfully.");
    Ok(())
}
