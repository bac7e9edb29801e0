use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

pub mod fixtures;
pub mod mock_jupiter;

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("jup_swap_program.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    // The aggregator is a native builtin; our program is loaded from the artifact below.
    pt.prefer_bpf(false);
    pt.set_compute_max_units(1_000_000);
    pt.add_upgradeable_program_to_genesis("jup_swap_program", &jup_swap_client::address::program_id());
    pt.add_program(
        "mock_jupiter",
        jup_swap_client::address::jupiter_program_id(),
        processor!(mock_jupiter::process_instruction),
    );
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn process(ctx: &mut ProgramTestContext, ixs: &[Instruction]) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await
}

pub fn transaction_error(err: BanksClientError) -> TransactionError {
    match err {
        BanksClientError::TransactionError(te) => te,
        BanksClientError::SimulationError { err, .. } => err,
        other => panic!("unexpected banks client error: {other:?}"),
    }
}

pub fn assert_instruction_error(res: Result<(), BanksClientError>, expected: InstructionError) {
    let err = res.expect_err("transaction should fail");
    match transaction_error(err) {
        TransactionError::InstructionError(_, ie) => assert_eq!(ie, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

pub fn assert_swap_error(res: Result<(), BanksClientError>, err: jup_swap_program::error::SwapError) {
    assert_instruction_error(res, InstructionError::Custom(err as u32));
}
