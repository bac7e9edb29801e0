use solana_sdk::signature::Signature;
use tracing::info;

use crate::address::vault_address;
use crate::error::Result;
use crate::instruction;
use crate::provider::Provider;

/// Send the program's `initialize` instruction and return its signature.
pub async fn initialize(provider: &Provider) -> Result<Signature> {
    let (vault, _) = vault_address();
    info!(%vault, payer = %provider.payer(), "initializing vault");

    let ix = instruction::initialize(&provider.payer());
    provider.send(&[ix], &[]).await
}
