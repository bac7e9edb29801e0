use clap::{Parser, Subcommand};
use jupiter_swap_api_client::JupiterSwapApiClient;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use jup_swap_client::{
    address::vault_address,
    config::{PROVIDER_URL_ENV, WALLET_ENV},
    logger, wire, JupiterConfig, Provider, ProviderConfig, SwapParams,
};

#[derive(Parser, Debug)]
#[command(name = "jup-swap", about = "Client for the Jupiter swap-vault program")]
struct Cli {
    /// Cluster URL or moniker (localnet, devnet, testnet, mainnet)
    #[arg(long, global = true, env = PROVIDER_URL_ENV)]
    url: Option<String>,

    /// Keypair file paying for and signing transactions
    #[arg(long, global = true, env = WALLET_ENV)]
    wallet: Option<String>,

    /// processed, confirmed or finalized
    #[arg(long, global = true)]
    commitment: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fund the vault PDA to its rent-exempt minimum
    Initialize,

    /// Print the vault address and its lamport balance
    Vault,

    /// Decode a wire-encoded transaction and check it fits in a packet
    Inspect {
        /// Transaction as passed to `sendTransaction`
        transaction: String,
        /// base58 or base64
        #[arg(long, default_value = "base64")]
        encoding: String,
    },

    /// Swap through Jupiter from the vault and forward the output
    Swap {
        #[arg(long)]
        input_mint: Pubkey,
        #[arg(long)]
        output_mint: Pubkey,
        /// Input amount in base units
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        recipient: Pubkey,
        #[arg(long, default_value_t = 50)]
        slippage_bps: u16,
        #[arg(long, default_value_t = 50)]
        min_slippage_bps: u16,
        #[arg(long, default_value_t = 1000)]
        max_slippage_bps: u16,
        /// Output forwarded to the recipient (default: quote minimum out)
        #[arg(long)]
        forward_amount: Option<u64>,
        /// Aggregator API base URL (default: $API_BASE_URL, then the public v6 API)
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = ProviderConfig::resolve(
        cli.url.as_deref(),
        cli.wallet.as_deref(),
        cli.commitment.as_deref(),
    )?;
    tracing::debug!(?config, "resolved provider");

    match cli.command {
        Command::Initialize => {
            let provider = Provider::new(&config)?;
            let signature = jup_swap_client::initialize(&provider).await?;
            println!("Your transaction signature {signature}");
        }
        Command::Vault => {
            let rpc = RpcClient::new_with_commitment(config.cluster_url.clone(), config.commitment);
            let (vault, bump) = vault_address();
            let balance = rpc.get_balance(&vault).await?;
            println!("Vault: {vault} (bump {bump})");
            println!("Balance: {balance} lamports");
        }
        Command::Inspect { transaction, encoding } => {
            let encoding = wire::parse_binary_encoding(&encoding)?;
            let (tx, size) = wire::decode_transaction(&transaction, encoding)?;
            let message = &tx.message;
            println!("Size: {size} bytes (max: {} bytes)", wire::PACKET_DATA_SIZE);
            println!("Recent blockhash: {}", message.recent_blockhash());
            for signature in &tx.signatures {
                println!("Signature: {signature}");
            }
            for (index, key) in message.static_account_keys().iter().enumerate() {
                println!("Account {index}: {key}");
            }
            for lookup in message.address_table_lookups().unwrap_or_default() {
                println!(
                    "Lookup table {}: {} writable, {} readonly",
                    lookup.account_key,
                    lookup.writable_indexes.len(),
                    lookup.readonly_indexes.len()
                );
            }
            println!("Instructions: {}", message.instructions().len());
        }
        Command::Swap {
            input_mint,
            output_mint,
            amount,
            recipient,
            slippage_bps,
            min_slippage_bps,
            max_slippage_bps,
            forward_amount,
            api_url,
        } => {
            if min_slippage_bps > max_slippage_bps {
                anyhow::bail!("--min-slippage-bps must not exceed --max-slippage-bps");
            }
            let provider = Provider::new(&config)?;
            let api_url = api_url.unwrap_or_else(|| JupiterConfig::from_env().api_base_url);
            tracing::debug!(%api_url, "using aggregator api");
            let jupiter = JupiterSwapApiClient::new(api_url);
            let params = SwapParams {
                input_mint,
                output_mint,
                amount,
                recipient,
                slippage_bps,
                min_slippage_bps,
                max_slippage_bps,
                forward_amount,
            };
            let signature = jup_swap_client::swap(&provider, &jupiter, &params).await?;
            println!("Your transaction signature {signature}");
        }
    }

    Ok(())
}
