use anyhow::Result;
use console::style;
pub use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, pubkey::Pubkey, transaction::Transaction};

use crate::{config::data::to_option_string, parse::parse_blockhash};

/// JSON document printed by every command that builds transactions.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsOutput {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "to_option_string")]
    pub mint: Option<Pubkey>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "to_option_string")]
    pub metadata: Option<Pubkey>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "to_option_string")]
    pub edition: Option<Pubkey>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "to_option_string")]
    pub recipient: Option<Pubkey>,
    pub recent_blockhash: String,
    pub transactions: Vec<String>,
}

impl TransactionsOutput {
    /// Stamps `blockhash` on every transaction and encodes them.
    pub fn new(transactions: &mut [Transaction], blockhash: Hash) -> Result<Self> {
        set_recent_blockhash(transactions, blockhash);

        Ok(TransactionsOutput {
            recent_blockhash: blockhash.to_string(),
            transactions: transactions
                .iter()
                .map(encode_transaction)
                .collect::<Result<Vec<String>>>()?,
            ..Default::default()
        })
    }
}

/// Base64 of the bincode wire format, as accepted by `sendTransaction`.
pub fn encode_transaction(transaction: &Transaction) -> Result<String> {
    Ok(base64::encode(bincode::serialize(transaction)?))
}

pub fn decode_transaction(encoded: &str) -> Result<Transaction> {
    Ok(bincode::deserialize(&base64::decode(encoded)?)?)
}

pub fn set_recent_blockhash(transactions: &mut [Transaction], blockhash: Hash) {
    for transaction in transactions {
        transaction.message.recent_blockhash = blockhash;
    }
}

/// Uses the blockhash given on the command line, or asks the cluster for one.
pub fn resolve_blockhash(blockhash: Option<String>, rpc: &RpcClient) -> Result<Hash> {
    match blockhash {
        Some(blockhash) => Ok(parse_blockhash(&blockhash)?),
        None => Ok(rpc.get_latest_blockhash()?),
    }
}

pub fn print_output(output: &TransactionsOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

pub fn print_with_style(indent: &str, key: &str, value: String) {
    println!(
        " {}{} {}",
        indent,
        style(format!(":.. {}:", key)).dim(),
        value
    );
}

pub fn spinner_with_style() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(120);
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "▹▹▹▹▹",
                "▸▹▹▹▹",
                "▹▸▹▹▹",
                "▹▹▸▹▹",
                "▹▹▹▸▹",
                "▹▹▹▹▸",
                "▪▪▪▪▪",
            ])
            .template("{spinner:.dim} {msg}"),
    );
    pb
}
