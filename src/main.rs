use std::{fs::OpenOptions, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use clap::Parser;
use console::style;
use nft_txs::{
    burn::{process_burn, BurnArgs},
    cli::{Cli, Commands},
    constants::{COMPLETE_EMOJI, ERROR_EMOJI, LOG_FILE},
    mint::{process_mint, MintArgs},
    show::{process_show, ShowArgs},
    update::{process_update, UpdateArgs},
    verify::{process_verify_collection, VerifyCollectionArgs},
};
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{self, prelude::*, EnvFilter};

/// Filter for the log file: user-provided level first, then `RUST_LOG`, then "trace".
///
/// Accepts anything `EnvFilter` does, including per-target directives such as
/// `info,solana_runtime=warn`.
fn log_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::from_str(level).map_err(|_| {
            anyhow!(
                "Invalid log level: {:?}.\n Valid levels are: trace, debug, info, warn, error.",
                level
            )
        }),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"))),
    }
}

fn setup_logging(env_filter: EnvFilter) -> Result<()> {
    // Log in current directory.
    let log_path = PathBuf::from(LOG_FILE);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .open(&log_path)?;

    let formatting_layer = BunyanFormattingLayer::new("nft-txs".into(), file);

    let subscriber = tracing_subscriber::registry()
        .with(formatting_layer.with_filter(env_filter))
        .with(JsonStorageLayer);

    set_global_default(subscriber)?;

    Ok(())
}

#[tokio::main(worker_threads = 2)]
async fn main() {
    match run().await {
        Ok(()) => {
            eprintln!(
                "\n{}{}",
                COMPLETE_EMOJI,
                style("Command successful.").green().bold().dim()
            );
        }
        Err(err) => {
            eprintln!(
                "\n{}{} {}",
                ERROR_EMOJI,
                style("Error running command:").red(),
                err,
            );
            // finished the program with an error code to the OS
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    solana_logger::setup_with_default("solana=off");

    let cli = Cli::parse();

    setup_logging(log_filter(cli.log_level.as_deref())?)?;

    tracing::info!("Building unsigned NFT transactions.");

    match cli.command {
        Commands::Mint {
            metadata,
            mint,
            owner,
            max_supply,
            rent,
            common,
        } => process_mint(MintArgs {
            keypair: common.keypair,
            rpc_url: common.rpc_url,
            payer: common.payer,
            metadata,
            mint,
            owner,
            max_supply: Some(max_supply),
            rent,
            blockhash: common.blockhash,
        })?,
        Commands::Update {
            metadata,
            mint,
            common,
        } => process_update(UpdateArgs {
            keypair: common.keypair,
            rpc_url: common.rpc_url,
            payer: common.payer,
            metadata,
            mint,
            blockhash: common.blockhash,
        })?,
        Commands::Burn {
            mint,
            collection_mint,
            common,
        } => process_burn(BurnArgs {
            keypair: common.keypair,
            rpc_url: common.rpc_url,
            payer: common.payer,
            mint,
            collection_mint,
            blockhash: common.blockhash,
        })?,
        Commands::VerifyCollection {
            mint,
            collection_mint,
            common,
        } => process_verify_collection(VerifyCollectionArgs {
            keypair: common.keypair,
            rpc_url: common.rpc_url,
            payer: common.payer,
            mint,
            collection_mint,
            blockhash: common.blockhash,
        })?,
        Commands::Show {
            mint,
            rpc_url,
            json,
        } => process_show(ShowArgs {
            rpc_url,
            mint,
            json,
        })?,
    }

    Ok(())
}
