use pinocchio::program_error::ProgramError;

/// Custom errors start at 6000 so codes line up with Anchor clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum SwapError {
    /// The aggregator account is not the Jupiter v6 program.
    InvalidJupiterProgram = 6000,
    /// The vault account is not the `[b"vault"]` PDA of this program.
    InvalidVault,
    /// A token program account is neither SPL Token nor Token-2022.
    InvalidTokenProgram,
    /// A mint is not owned by its declared token program or is not initialized.
    InvalidMint,
    /// A token account does not match its expected mint, authority or address.
    InvalidTokenAccount,
    ZeroAmount,
    /// More route accounts than a single CPI can carry.
    TooManyRouteAccounts,
    /// The vault holds less output than the amount to forward.
    InsufficientOutput,
}

impl From<SwapError> for ProgramError {
    fn from(err: SwapError) -> Self {
        ProgramError::Custom(err as u32)
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: SwapError) -> ProgramError {
    err.into()
}
