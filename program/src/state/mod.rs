pub mod token; // MintView, TokenAccountView

pub use token::{AccountState, MintView, TokenAccountView, MINT_BASE_LEN, TOKEN_ACCOUNT_BASE_LEN};
