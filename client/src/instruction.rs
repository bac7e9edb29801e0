use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account_client::instruction::create_associated_token_account_idempotent;

use crate::address::{associated_token_address, jupiter_program_id, program_id, vault_address};
use crate::error::{ClientError, Result};

/// Anchor's instruction discriminator: `sha256("global:<name>")[..8]`.
pub fn discriminator(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(b"global:");
    hasher.update(name.as_bytes());
    let result = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&result[..8]);
    discriminator
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SwapIxData {
    pub data: Vec<u8>,
    pub amount: u64,
}

impl SwapIxData {
    pub fn to_instruction_data(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(8 + 4 + self.data.len() + 8);
        out.extend_from_slice(&discriminator("swap"));
        self.serialize(&mut out)
            .map_err(|e| ClientError::encoding(format!("swap data: {e}")))?;
        Ok(out)
    }
}

pub fn initialize(payer: &Pubkey) -> Instruction {
    let (vault, _) = vault_address();
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: discriminator("initialize").to_vec(),
    }
}

/// Fixed accounts of a swap, in program order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAccounts {
    pub input_mint: Pubkey,
    pub input_token_program: Pubkey,
    pub output_mint: Pubkey,
    pub output_token_program: Pubkey,
    pub vault: Pubkey,
    pub vault_input_token_account: Pubkey,
    pub vault_output_token_account: Pubkey,
    pub recipient_token_account: Pubkey,
    pub recipient: Pubkey,
}

impl SwapAccounts {
    pub fn new(
        input_mint: Pubkey,
        input_token_program: Pubkey,
        output_mint: Pubkey,
        output_token_program: Pubkey,
        recipient: Pubkey,
    ) -> Self {
        let (vault, _) = vault_address();
        Self {
            input_mint,
            input_token_program,
            output_mint,
            output_token_program,
            vault,
            vault_input_token_account: associated_token_address(&vault, &input_mint, &input_token_program),
            vault_output_token_account: associated_token_address(&vault, &output_mint, &output_token_program),
            recipient_token_account: associated_token_address(&recipient, &output_mint, &output_token_program),
            recipient,
        }
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.input_mint, false),
            AccountMeta::new_readonly(self.input_token_program, false),
            AccountMeta::new_readonly(self.output_mint, false),
            AccountMeta::new_readonly(self.output_token_program, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.vault_input_token_account, false),
            AccountMeta::new(self.vault_output_token_account, false),
            AccountMeta::new(self.recipient_token_account, false),
            AccountMeta::new_readonly(self.recipient, false),
            AccountMeta::new_readonly(jupiter_program_id(), false),
        ]
    }
}

/// Build the program's swap instruction around an aggregator route.
///
/// Route accounts keep their writability but never sign at the
/// transaction level; the program signs for the vault inside the CPI.
pub fn swap(
    accounts: &SwapAccounts,
    route_data: Vec<u8>,
    amount: u64,
    route_accounts: Vec<AccountMeta>,
) -> Result<Instruction> {
    let mut metas = accounts.to_account_metas();
    metas.extend(route_accounts.into_iter().map(|mut account| {
        account.is_signer = false;
        account
    }));

    Ok(Instruction {
        program_id: program_id(),
        accounts: metas,
        data: SwapIxData { data: route_data, amount }.to_instruction_data()?,
    })
}

/// Idempotently create the vault input/output and recipient token accounts.
pub fn create_token_accounts(payer: &Pubkey, accounts: &SwapAccounts) -> Vec<Instruction> {
    vec![
        create_associated_token_account_idempotent(
            payer,
            &accounts.vault,
            &accounts.input_mint,
            &accounts.input_token_program,
        ),
        create_associated_token_account_idempotent(
            payer,
            &accounts.vault,
            &accounts.output_mint,
            &accounts.output_token_program,
        ),
        create_associated_token_account_idempotent(
            payer,
            &accounts.recipient,
            &accounts.output_mint,
            &accounts.output_token_program,
        ),
    ]
}
