use jupiter_swap_api_client::{
    quote::QuoteRequest,
    swap::SwapRequest,
    transaction_config::{DynamicSlippageSettings, TransactionConfig},
    JupiterSwapApiClient,
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Signature};
use tracing::{debug, info, warn};

use crate::address::jupiter_program_id;
use crate::error::{ClientError, Result};
use crate::instruction::{self, SwapAccounts};
use crate::provider::Provider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    /// Input amount quoted and sold by the vault.
    pub amount: u64,
    pub recipient: Pubkey,
    pub slippage_bps: u16,
    pub min_slippage_bps: u16,
    pub max_slippage_bps: u16,
    /// Output forwarded to the recipient; defaults to the quote's minimum out.
    pub forward_amount: Option<u64>,
}

/// Amount of output forwarded to the recipient.
///
/// Without an explicit request this is the quote's slippage-adjusted minimum,
/// which the vault is guaranteed to receive when the route succeeds.
pub fn forward_amount(minimum_out: u64, requested: Option<u64>) -> Result<u64> {
    let amount = requested.unwrap_or(minimum_out);
    if amount == 0 {
        return Err(ClientError::invalid_swap("forward amount must be greater than zero"));
    }
    if amount > minimum_out {
        warn!(amount, minimum_out, "forward amount exceeds the quote's minimum output");
    }
    Ok(amount)
}

/// Assemble the transaction instructions: compute budget first, then token
/// account creation, then the program's swap wrapping the aggregator route.
pub fn assemble(
    payer: &Pubkey,
    accounts: &SwapAccounts,
    compute_budget: Vec<Instruction>,
    route: Instruction,
    amount: u64,
) -> Result<Vec<Instruction>> {
    if route.program_id != jupiter_program_id() {
        return Err(ClientError::invalid_swap(format!(
            "route targets {} instead of the Jupiter aggregator",
            route.program_id
        )));
    }

    let mut ixs = compute_budget;
    ixs.extend(instruction::create_token_accounts(payer, accounts));
    ixs.push(instruction::swap(accounts, route.data, amount, route.accounts)?);
    Ok(ixs)
}

/// Quote `params.amount` on Jupiter, route it through the vault and forward
/// the output to the recipient.
pub async fn swap(
    provider: &Provider,
    jupiter: &JupiterSwapApiClient,
    params: &SwapParams,
) -> Result<Signature> {
    let input_token_program = provider.token_program_of(&params.input_mint).await?;
    let output_token_program = provider.token_program_of(&params.output_mint).await?;
    let accounts = SwapAccounts::new(
        params.input_mint,
        input_token_program,
        params.output_mint,
        output_token_program,
        params.recipient,
    );

    info!(input = %params.input_mint, output = %params.output_mint, amount = params.amount, "fetching quote");
    let quote_request = QuoteRequest {
        amount: params.amount,
        input_mint: params.input_mint,
        output_mint: params.output_mint,
        slippage_bps: params.slippage_bps,
        ..QuoteRequest::default()
    };
    let quote_response = jupiter
        .quote(&quote_request)
        .await
        .map_err(|e| ClientError::Api(format!("quote: {e:?}")))?;
    info!(
        out_amount = quote_response.out_amount,
        minimum_out = quote_response.other_amount_threshold,
        "quote received"
    );
    let amount = forward_amount(quote_response.other_amount_threshold, params.forward_amount)?;

    // The vault is the swapping user; its token accounts are created here
    // rather than by the aggregator's setup instructions.
    let response = jupiter
        .swap_instructions(&SwapRequest {
            user_public_key: accounts.vault,
            quote_response,
            config: TransactionConfig {
                skip_user_accounts_rpc_calls: true,
                wrap_and_unwrap_sol: false,
                dynamic_compute_unit_limit: true,
                dynamic_slippage: Some(DynamicSlippageSettings {
                    min_bps: Some(params.min_slippage_bps),
                    max_bps: Some(params.max_slippage_bps),
                }),
                ..TransactionConfig::default()
            },
        })
        .await
        .map_err(|e| ClientError::Api(format!("swap instructions: {e:?}")))?;
    debug!(
        route_accounts = response.swap_instruction.accounts.len(),
        lookup_tables = response.address_lookup_table_addresses.len(),
        "swap instructions received"
    );

    let lookup_tables = provider
        .lookup_tables(&response.address_lookup_table_addresses)
        .await?;
    let ixs = assemble(
        &provider.payer(),
        &accounts,
        response.compute_budget_instructions,
        response.swap_instruction,
        amount,
    )?;

    provider.send(&ixs, &lookup_tables).await
}
