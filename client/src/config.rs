use std::env;
use std::path::{Path, PathBuf};

use solana_sdk::commitment_config::CommitmentConfig;

use crate::error::{ClientError, Result};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

pub const DEFAULT_CLUSTER_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";
pub const DEFAULT_API_BASE_URL: &str = "https://quote-api.jup.ag/v6";

/// Cluster endpoint and signing wallet, resolved like an Anchor provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub cluster_url: String,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    pub fn resolve(
        cluster: Option<&str>,
        wallet: Option<&str>,
        commitment: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            cluster_url: cluster_url(cluster.unwrap_or(DEFAULT_CLUSTER_URL)),
            wallet_path: expand_home(wallet.unwrap_or(DEFAULT_WALLET_PATH))?,
            commitment: parse_commitment(commitment.unwrap_or("confirmed"))?,
        })
    }

    pub fn from_env() -> Result<Self> {
        let cluster = env::var(PROVIDER_URL_ENV).ok();
        let wallet = env::var(WALLET_ENV).ok();
        Self::resolve(cluster.as_deref(), wallet.as_deref(), None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JupiterConfig {
    pub api_base_url: String,
}

impl JupiterConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
        }
    }
}

/// Map Anchor cluster monikers to their RPC endpoints; anything else is
/// taken as a URL.
pub fn cluster_url(cluster: &str) -> String {
    match cluster {
        "localnet" | "localhost" => DEFAULT_CLUSTER_URL.to_string(),
        "devnet" => "https://api.devnet.solana.com".to_string(),
        "testnet" => "https://api.testnet.solana.com".to_string(),
        "mainnet" | "mainnet-beta" => "https://api.mainnet-beta.solana.com".to_string(),
        url => url.to_string(),
    }
}

pub fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    match level {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(ClientError::config(format!(
            "unknown commitment `{other}`; expected processed, confirmed or finalized"
        ))),
    }
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir()
                .ok_or_else(|| ClientError::config("cannot expand `~`: no home directory"))?;
            Ok(home.join(rest))
        }
        None => Ok(Path::new(path).to_path_buf()),
    }
}
