use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("aggregator api request failed: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read keypair {path}: {message}")]
    Keypair { path: PathBuf, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("encoding error: {message}")]
    Encoding { message: String },

    #[error(
        "transaction too large: {size} bytes (max: {max} bytes); check that address lookup tables were resolved"
    )]
    TransactionTooLarge { size: usize, max: usize },

    #[error("failed to compile message: {0}")]
    Compile(#[from] solana_sdk::message::CompileError),

    #[error("failed to sign transaction: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    #[error("invalid swap: {message}")]
    InvalidSwap { message: String },
}

impl ClientError {
    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config { message: message.into() }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        ClientError::Encoding { message: message.into() }
    }

    pub fn invalid_swap(message: impl Into<String>) -> Self {
        ClientError::InvalidSwap { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
