use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    address_lookup_table::state::AddressLookupTable,
    instruction::Instruction,
    message::{v0, AddressLookupTableAccount, Message, VersionedMessage},
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature},
    signer::Signer,
    transaction::VersionedTransaction,
};
use solana_transaction_status_client_types::UiTransactionEncoding;
use tracing::{debug, info, Level};

use crate::address::is_token_program;
use crate::config::ProviderConfig;
use crate::error::{ClientError, Result};
use crate::wire::{check_transaction_size, serialize_and_encode};

/// RPC connection plus the wallet that pays for and signs transactions.
pub struct Provider {
    rpc: RpcClient,
    payer: Keypair,
}

impl Provider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let payer = read_keypair_file(&config.wallet_path).map_err(|e| ClientError::Keypair {
            path: config.wallet_path.clone(),
            message: e.to_string(),
        })?;
        let rpc = RpcClient::new_with_commitment(config.cluster_url.clone(), config.commitment);
        debug!(cluster = %config.cluster_url, payer = %payer.pubkey(), "provider ready");
        Ok(Self { rpc, payer })
    }

    /// Provider configured from `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`.
    pub fn env() -> Result<Self> {
        Self::new(&ProviderConfig::from_env()?)
    }

    pub fn with_payer(rpc: RpcClient, payer: Keypair) -> Self {
        Self { rpc, payer }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Owning token program of `mint`, SPL Token or Token-2022.
    pub async fn token_program_of(&self, mint: &Pubkey) -> Result<Pubkey> {
        let account = self.rpc.get_account(mint).await?;
        if !is_token_program(&account.owner) {
            return Err(ClientError::invalid_swap(format!(
                "{mint} is owned by {} which is not a token program",
                account.owner
            )));
        }
        Ok(account.owner)
    }

    pub async fn lookup_tables(&self, addresses: &[Pubkey]) -> Result<Vec<AddressLookupTableAccount>> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }
        let accounts = self.rpc.get_multiple_accounts(addresses).await?;

        let mut tables = Vec::with_capacity(addresses.len());
        for (key, account) in addresses.iter().zip(accounts) {
            let account = account.ok_or_else(|| {
                ClientError::invalid_swap(format!("address lookup table {key} not found"))
            })?;
            let table = AddressLookupTable::deserialize(&account.data).map_err(|e| {
                ClientError::encoding(format!("address lookup table {key}: {e}"))
            })?;
            tables.push(AddressLookupTableAccount {
                key: *key,
                addresses: table.addresses.to_vec(),
            });
        }
        debug!(count = tables.len(), "resolved address lookup tables");
        Ok(tables)
    }

    /// Compile the transaction, check its wire size, sign with the payer and
    /// send it, waiting for the configured commitment.
    ///
    /// A v0 message is compiled only when there are lookup tables to load;
    /// otherwise the message is legacy.
    pub async fn send(
        &self,
        instructions: &[Instruction],
        lookup_tables: &[AddressLookupTableAccount],
    ) -> Result<Signature> {
        let payer = self.payer.pubkey();
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let message = if lookup_tables.is_empty() {
            VersionedMessage::Legacy(Message::new_with_blockhash(instructions, Some(&payer), &blockhash))
        } else {
            VersionedMessage::V0(v0::Message::try_compile(&payer, instructions, lookup_tables, blockhash)?)
        };
        let tx = VersionedTransaction::try_new(message, &[&self.payer])?;

        let size = check_transaction_size(&tx)?;
        debug!(size, instructions = instructions.len(), "sending transaction");
        if tracing::enabled!(Level::DEBUG) {
            // feed back into `jup-swap inspect` when a send fails
            let encoded = serialize_and_encode(&tx, UiTransactionEncoding::Base64)?;
            debug!(%encoded, "signed transaction");
        }

        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        info!(%signature, "transaction confirmed");
        Ok(signature)
    }
}
