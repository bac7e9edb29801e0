use solana_program::{program_option::COption, program_pack::Pack};
use solana_program_test::{BanksClient, ProgramTest};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    rent::Rent,
};
use spl_token::state::{Account as TokenAccount, AccountState, Mint};

use jup_swap_client::{address, instruction::SwapAccounts};

use super::mock_jupiter;

pub const INPUT_DECIMALS: u8 = 9;
pub const OUTPUT_DECIMALS: u8 = 6;

pub fn add_mint(pt: &mut ProgramTest, mint: Pubkey, decimals: u8, token_program: Pubkey) {
    let state = Mint {
        mint_authority: COption::None,
        supply: u64::MAX / 2,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(state, &mut data).unwrap();
    pt.add_account(
        mint,
        Account {
            lamports: Rent::default().minimum_balance(Mint::LEN),
            data,
            owner: token_program,
            executable: false,
            rent_epoch: 0,
        },
    );
}

// One buffer per account: packing several states into a shared buffer leaves
// only the last one behind.
pub fn add_token_account(
    pt: &mut ProgramTest,
    address: Pubkey,
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
    token_program: Pubkey,
) {
    let state = TokenAccount {
        mint,
        owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; TokenAccount::LEN];
    TokenAccount::pack(state, &mut data).unwrap();
    pt.add_account(
        address,
        Account {
            lamports: Rent::default().minimum_balance(TokenAccount::LEN),
            data,
            owner: token_program,
            executable: false,
            rent_epoch: 0,
        },
    );
}

/// A mint-sized account owned by `token_program` that was never initialized.
pub fn add_uninitialized_mint(pt: &mut ProgramTest, mint: Pubkey, token_program: Pubkey) {
    pt.add_account(
        mint,
        Account {
            lamports: Rent::default().minimum_balance(Mint::LEN),
            data: vec![0u8; Mint::LEN],
            owner: token_program,
            executable: false,
            rent_epoch: 0,
        },
    );
}

pub async fn token_balance(banks_client: &mut BanksClient, address: Pubkey) -> u64 {
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    TokenAccount::unpack(&account.data).unwrap().amount
}

/// Mints, vault/recipient token accounts and a mock aggregator pool.
pub struct SwapFixture {
    pub accounts: SwapAccounts,
    pub pool_authority: Pubkey,
    pub pool_input: Pubkey,
    pub pool_output: Pubkey,
}

impl SwapFixture {
    pub fn new(pt: &mut ProgramTest, vault_input_amount: u64, pool_output_amount: u64) -> Self {
        Self::with_output_token_program(pt, vault_input_amount, pool_output_amount, spl_token::id())
    }

    /// Input mint under SPL Token, output mint under `output_token_program`.
    pub fn with_output_token_program(
        pt: &mut ProgramTest,
        vault_input_amount: u64,
        pool_output_amount: u64,
        output_token_program: Pubkey,
    ) -> Self {
        let input_token_program = spl_token::id();
        let input_mint = Pubkey::new_unique();
        let output_mint = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let accounts = SwapAccounts::new(
            input_mint,
            input_token_program,
            output_mint,
            output_token_program,
            recipient,
        );

        add_mint(pt, input_mint, INPUT_DECIMALS, input_token_program);
        add_mint(pt, output_mint, OUTPUT_DECIMALS, output_token_program);
        add_token_account(
            pt,
            accounts.vault_input_token_account,
            input_mint,
            accounts.vault,
            vault_input_amount,
            input_token_program,
        );
        add_token_account(pt, accounts.vault_output_token_account, output_mint, accounts.vault, 0, output_token_program);
        add_token_account(pt, accounts.recipient_token_account, output_mint, recipient, 0, output_token_program);

        let (pool_authority, _) = mock_jupiter::pool_authority(&address::jupiter_program_id());
        let pool_input = Pubkey::new_unique();
        let pool_output = Pubkey::new_unique();
        add_token_account(pt, pool_input, input_mint, pool_authority, 0, input_token_program);
        add_token_account(
            pt,
            pool_output,
            output_mint,
            pool_authority,
            pool_output_amount,
            output_token_program,
        );

        Self {
            accounts,
            pool_authority,
            pool_input,
            pool_output,
        }
    }

    /// The aggregator instruction the quote API would hand back for this pool.
    pub fn route(&self, in_amount: u64, out_amount: u64) -> Instruction {
        Instruction {
            program_id: address::jupiter_program_id(),
            accounts: vec![
                AccountMeta::new_readonly(self.accounts.vault, true),
                AccountMeta::new(self.accounts.vault_input_token_account, false),
                AccountMeta::new(self.pool_input, false),
                AccountMeta::new(self.pool_output, false),
                AccountMeta::new(self.accounts.vault_output_token_account, false),
                AccountMeta::new_readonly(self.pool_authority, false),
                AccountMeta::new_readonly(self.accounts.input_token_program, false),
                AccountMeta::new_readonly(self.accounts.output_token_program, false),
            ],
            data: mock_jupiter::route_data(in_amount, out_amount),
        }
    }

    pub fn swap_instruction(&self, in_amount: u64, out_amount: u64, forward: u64) -> Instruction {
        let route = self.route(in_amount, out_amount);
        jup_swap_client::instruction::swap(&self.accounts, route.data, forward, route.accounts).unwrap()
    }
}
