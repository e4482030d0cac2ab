use console::style;
use mpl_token_metadata::instruction::update_metadata_accounts_v2;

use crate::common::*;
use crate::metadata::{load_metadata_json, MetadataJson};
use crate::parse::parse_pubkey;
use crate::pdas::find_metadata_pda;
use crate::utils::*;

pub struct UpdateArgs {
    pub keypair: Option<String>,
    pub rpc_url: Option<String>,
    pub payer: Option<String>,
    pub metadata: String,
    pub mint: String,
    pub blockhash: Option<String>,
}

pub fn process_update(args: UpdateArgs) -> Result<()> {
    let nft_config = nft_setup(args.keypair, args.rpc_url, args.payer)?;
    let metadata_json = load_metadata_json(&args.metadata)?;
    let mint = parse_pubkey("mint address", &args.mint)?;

    eprintln!(
        "{} {}Building update metadata transaction",
        style("[1/1]").bold().dim(),
        PAPER_EMOJI
    );
    eprintln!("{} {}", style("Metadata:").bold(), find_metadata_pda(&mint));

    let tx = get_update_metadata_tx(&nft_config.payer, &mint, &metadata_json)?;
    info!("Update metadata of {} by {}", mint, nft_config.payer);

    let client = setup_client(&nft_config.rpc_url);
    let blockhash = resolve_blockhash(args.blockhash, &client)?;

    let mut output = TransactionsOutput::new(&mut [tx], blockhash)?;
    output.mint = Some(mint);
    output.metadata = Some(find_metadata_pda(&mint));

    print_output(&output)
}

/// Rewrites the metadata of `mint`. `author` is the update authority: it signs,
/// pays, keeps the authority and is the only creator that can be verified.
///
/// The collection is sent as verified, so the NFT must already be verified in it.
pub fn get_update_metadata_tx(
    author: &Pubkey,
    mint: &Pubkey,
    metadata_json: &MetadataJson,
) -> Result<Transaction> {
    let data = metadata_json.to_data_v2(author, true)?;

    let update_metadata_ix = update_metadata_accounts_v2(
        mpl_token_metadata::ID,
        find_metadata_pda(mint),
        *author,
        Some(*author),
        Some(data),
        Some(false),
        Some(true),
    );

    Ok(Transaction::new_with_payer(
        &[update_metadata_ix],
        Some(author),
    ))
}
