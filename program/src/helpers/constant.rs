use pinocchio::pubkey::Pubkey;
use pinocchio_pubkey::pubkey;

pub const VAULT_SEED: &[u8] = b"vault";

/// Jupiter aggregator v6.
pub const JUPITER_PROGRAM_ID: Pubkey = pubkey!("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4");

pub const TOKEN_PROGRAM_ID: Pubkey = pinocchio_token::ID;
pub const TOKEN_2022_PROGRAM_ID: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

// sha256("global:<name>")[..8], the Anchor instruction namespace
pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
pub const SWAP_DISCRIMINATOR: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];

/// Upper bound on accounts forwarded to the aggregator in one CPI.
pub const MAX_ROUTE_ACCOUNTS: usize = 64;

/// Accounts that precede the route accounts in a swap instruction.
pub const SWAP_FIXED_ACCOUNTS: usize = 10;

// SPL token instruction tag for TransferChecked
pub const TRANSFER_CHECKED_TAG: u8 = 12;
