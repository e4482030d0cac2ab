use console::style;
use mpl_token_metadata::instruction::verify_collection;

use crate::common::*;
use crate::parse::parse_pubkey;
use crate::pdas::{find_master_edition_pda, find_metadata_pda};
use crate::utils::*;

pub struct VerifyCollectionArgs {
    pub keypair: Option<String>,
    pub rpc_url: Option<String>,
    pub payer: Option<String>,
    pub mint: String,
    pub collection_mint: String,
    pub blockhash: Option<String>,
}

pub fn process_verify_collection(args: VerifyCollectionArgs) -> Result<()> {
    let nft_config = nft_setup(args.keypair, args.rpc_url, args.payer)?;
    let mint = parse_pubkey("mint address", &args.mint)?;
    let collection_mint = parse_pubkey("collection mint address", &args.collection_mint)?;

    eprintln!(
        "{} {}Building verify collection transaction",
        style("[1/1]").bold().dim(),
        COLLECTION_EMOJI
    );

    let tx = get_verify_collection_tx(&nft_config.payer, &mint, &collection_mint);
    info!(
        "Verify collection {} for mint {} with authority {}",
        collection_mint, mint, nft_config.payer
    );

    let client = setup_client(&nft_config.rpc_url);
    let blockhash = resolve_blockhash(args.blockhash, &client)?;

    let mut output = TransactionsOutput::new(&mut [tx], blockhash)?;
    output.mint = Some(mint);
    output.metadata = Some(find_metadata_pda(&mint));

    print_output(&output)
}

pub fn get_verify_collection_ix(
    payer: &Pubkey,
    mint: &Pubkey,
    collection_mint: &Pubkey,
) -> Instruction {
    verify_collection(
        mpl_token_metadata::ID,
        find_metadata_pda(mint),
        *payer,
        *payer,
        *collection_mint,
        find_metadata_pda(collection_mint),
        find_master_edition_pda(collection_mint),
        None,
    )
}

/// Marks the NFT's collection as verified; `payer` must be the collection's
/// update authority.
pub fn get_verify_collection_tx(
    payer: &Pubkey,
    mint: &Pubkey,
    collection_mint: &Pubkey,
) -> Transaction {
    Transaction::new_with_payer(
        &[get_verify_collection_ix(payer, mint, collection_mint)],
        Some(payer),
    )
}
