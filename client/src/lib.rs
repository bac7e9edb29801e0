//! Client binding for the Jupiter swap-vault program: instruction builders,
//! provider setup, and the `initialize` / `swap` flows used by the CLI.

pub mod address;
pub mod config;
pub mod error;
pub mod initialize;
pub mod instruction;
pub mod logger;
pub mod provider;
pub mod swap;
pub mod wire;

pub use config::{JupiterConfig, ProviderConfig};
pub use error::{ClientError, Result};
pub use initialize::initialize;
pub use provider::Provider;
pub use swap::{swap, SwapParams};
