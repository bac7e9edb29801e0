use pinocchio::{
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::helpers::constant::TRANSFER_CHECKED_TAG;

/// `TransferChecked` against whichever token program owns the mint.
///
/// `pinocchio_token::instructions::TransferChecked` is pinned to SPL Token,
/// so the instruction is built here to reach Token-2022 mints as well.
///
/// Accounts:
/// 0. `[writable]` source token account
/// 1. `[]`         mint
/// 2. `[writable]` destination token account
/// 3. `[signer]`   source authority
pub struct TransferChecked<'a> {
    pub from: &'a AccountInfo,
    pub mint: &'a AccountInfo,
    pub to: &'a AccountInfo,
    pub authority: &'a AccountInfo,
    pub token_program: &'a AccountInfo,
    pub amount: u64,
    pub decimals: u8,
}

impl TransferChecked<'_> {
    pub fn invoke_signed(&self, signers: &[Signer]) -> ProgramResult {
        let account_metas: [AccountMeta; 4] = [
            AccountMeta::writable(self.from.key()),
            AccountMeta::readonly(self.mint.key()),
            AccountMeta::writable(self.to.key()),
            AccountMeta::readonly_signer(self.authority.key()),
        ];

        // tag (1) | amount (8) | decimals (1)
        let mut data = [0u8; 10];
        data[0] = TRANSFER_CHECKED_TAG;
        data[1..9].copy_from_slice(&self.amount.to_le_bytes());
        data[9] = self.decimals;

        let instruction = Instruction {
            program_id: self.token_program.key(),
            accounts: &account_metas,
            data: &data,
        };

        invoke_signed(
            &instruction,
            &[self.from, self.mint, self.to, self.authority],
            signers,
        )
    }
}
