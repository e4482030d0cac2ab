pub use anyhow::{anyhow, Result};
pub use serde::{Deserialize, Serialize};
pub use solana_client::rpc_client::RpcClient;
pub use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::Transaction,
};
pub use std::{path::Path, str::FromStr};
pub use tracing::{debug, error, info, warn};

pub use crate::config::data::NftConfig;
pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::setup::{nft_setup, nft_setup_rpc_url, setup_client};
