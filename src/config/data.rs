use std::fmt::Display;

use serde::{Deserialize, Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;

/// Resolved settings shared by every command.
///
/// `payer` is only ever used as a public key: transactions are left unsigned.
#[derive(Debug, Clone)]
pub struct NftConfig {
    pub rpc_url: String,
    pub payer: Pubkey,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SolanaConfig {
    pub json_rpc_url: String,
    pub keypair_path: String,
    pub commitment: String,
}

pub fn to_option_string<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    match value {
        Some(v) => serializer.collect_str(&v),
        None => serializer.serialize_none(),
    }
}
