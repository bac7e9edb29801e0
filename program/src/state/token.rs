use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

// Base layouts shared by SPL Token and Token-2022; extensions follow them.
pub const MINT_BASE_LEN: usize = 82;
pub const TOKEN_ACCOUNT_BASE_LEN: usize = 165;

const MINT_DECIMALS_OFFSET: usize = 44;
const MINT_IS_INITIALIZED_OFFSET: usize = 45;

const ACCOUNT_MINT_OFFSET: usize = 0;
const ACCOUNT_OWNER_OFFSET: usize = 32;
const ACCOUNT_AMOUNT_OFFSET: usize = 64;
const ACCOUNT_STATE_OFFSET: usize = 108;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountState {
    Uninitialized = 0,
    Initialized = 1,
    Frozen = 2,
}

impl TryFrom<u8> for AccountState {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            2 => Ok(AccountState::Frozen),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

/// Read-only view over the base fields of a mint.
pub struct MintView<'a> {
    data: &'a [u8],
}

impl<'a> MintView<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        if data.len() < MINT_BASE_LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[MINT_IS_INITIALIZED_OFFSET] != 1 {
            return Err(ProgramError::UninitializedAccount);
        }
        Ok(Self { data })
    }

    #[inline]
    pub fn decimals(&self) -> u8 {
        self.data[MINT_DECIMALS_OFFSET]
    }

    /// Borrow `mint_info` just long enough to read its decimals.
    pub fn decimals_of(mint_info: &AccountInfo) -> Result<u8, ProgramError> {
        let data = mint_info.try_borrow_data()?;
        Ok(MintView::parse(&data)?.decimals())
    }
}

/// Read-only view over the base fields of a token account.
pub struct TokenAccountView<'a> {
    data: &'a [u8],
}

impl<'a> TokenAccountView<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        if data.len() < TOKEN_ACCOUNT_BASE_LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        match AccountState::try_from(data[ACCOUNT_STATE_OFFSET])? {
            AccountState::Uninitialized => Err(ProgramError::UninitializedAccount),
            AccountState::Initialized | AccountState::Frozen => Ok(Self { data }),
        }
    }

    #[inline]
    pub fn mint(&self) -> &Pubkey {
        array_ref(self.data, ACCOUNT_MINT_OFFSET)
    }

    /// The token account authority (not the owning program).
    #[inline]
    pub fn owner(&self) -> &Pubkey {
        array_ref(self.data, ACCOUNT_OWNER_OFFSET)
    }

    #[inline]
    pub fn amount(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.data[ACCOUNT_AMOUNT_OFFSET..ACCOUNT_AMOUNT_OFFSET + 8]);
        u64::from_le_bytes(buf)
    }

    pub fn amount_of(token_account_info: &AccountInfo) -> Result<u64, ProgramError> {
        let data = token_account_info.try_borrow_data()?;
        Ok(TokenAccountView::parse(&data)?.amount())
    }
}

#[inline(always)]
fn array_ref(data: &[u8], offset: usize) -> &Pubkey {
    // parse() guarantees data covers the whole base layout
    unsafe { &*(data[offset..offset + 32].as_ptr() as *const Pubkey) }
}
