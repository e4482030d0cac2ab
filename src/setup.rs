use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Signer},
};

use crate::common::*;
use crate::config::{data::SolanaConfig, parser::parse_solana_config};

pub fn setup_client(rpc_url: &str) -> RpcClient {
    RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed())
}

/// RPC url for commands that only read from the cluster.
pub fn nft_setup_rpc_url(rpc_url_opt: Option<String>) -> String {
    resolve_rpc_url(rpc_url_opt, parse_solana_config().as_ref())
}

fn resolve_rpc_url(rpc_url_opt: Option<String>, sol_config: Option<&SolanaConfig>) -> String {
    match rpc_url_opt {
        Some(rpc_url) => rpc_url,
        None => match sol_config {
            Some(sol_config) => sol_config.json_rpc_url.clone(),
            None => String::from(DEFAULT_RPC_URL),
        },
    }
}

/// Resolves the RPC url and the payer address.
///
/// The payer comes from `payer_opt` when given, otherwise from the public half of a
/// keypair file (explicit path, Solana CLI config, or the default location).
pub fn nft_setup(
    keypair_opt: Option<String>,
    rpc_url_opt: Option<String>,
    payer_opt: Option<String>,
) -> Result<NftConfig> {
    let sol_config_option = parse_solana_config();

    let rpc_url = resolve_rpc_url(rpc_url_opt, sol_config_option.as_ref());

    let payer = match payer_opt {
        Some(payer) => Pubkey::from_str(&payer)
            .map_err(|_| SetupError::InvalidPayerAddress(payer.clone()))?,
        None => {
            let keypair_path = match keypair_opt {
                Some(keypair_path) => keypair_path,
                None => match sol_config_option {
                    Some(ref sol_config) => sol_config.keypair_path.clone(),
                    None => DEFAULT_KEYPATH.to_string(),
                },
            };
            let keypair_path = shellexpand::tilde(&keypair_path).to_string();

            read_keypair_file(&keypair_path)
                .map_err(|err| SetupError::KeypairFileError(keypair_path, err.to_string()))?
                .pubkey()
        }
    };

    debug!("Using RPC {} with payer {}", rpc_url, payer);

    Ok(NftConfig { rpc_url, payer })
}
