use console::style;
use mpl_token_metadata::state::{Creator as MetaplexCreator, Metadata};

use crate::common::*;
use crate::parse::parse_pubkey;
use crate::pdas::{find_metadata_pda, get_metadata};
use crate::utils::*;

pub struct ShowArgs {
    pub rpc_url: Option<String>,
    pub mint: String,
    pub json: bool,
}

/// Human readable view of an on-chain metadata account.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrettyMetadata {
    pub mint: String,
    pub update_authority: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<PrettyCreator>,
    pub collection: Option<PrettyCollection>,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PrettyCreator {
    pub address: String,
    pub share: u8,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PrettyCollection {
    pub key: String,
    pub verified: bool,
}

impl From<&Metadata> for PrettyMetadata {
    fn from(metadata: &Metadata) -> Self {
        PrettyMetadata {
            mint: metadata.mint.to_string(),
            update_authority: metadata.update_authority.to_string(),
            name: trim_padding(&metadata.data.name),
            symbol: trim_padding(&metadata.data.symbol),
            uri: trim_padding(&metadata.data.uri),
            seller_fee_basis_points: metadata.data.seller_fee_basis_points,
            creators: pretty_creators(metadata.data.creators.as_deref()),
            collection: metadata.collection.as_ref().map(|c| PrettyCollection {
                key: c.key.to_string(),
                verified: c.verified,
            }),
            primary_sale_happened: metadata.primary_sale_happened,
            is_mutable: metadata.is_mutable,
        }
    }
}

/// Strings are stored NUL padded to their maximum length.
pub fn trim_padding(value: &str) -> String {
    value.trim_end_matches(char::from(0)).to_string()
}

pub fn pretty_creators(creators: Option<&[MetaplexCreator]>) -> Vec<PrettyCreator> {
    creators
        .unwrap_or_default()
        .iter()
        .map(|c| PrettyCreator {
            address: c.address.to_string(),
            share: c.share,
            verified: c.verified,
        })
        .collect()
}

pub fn process_show(args: ShowArgs) -> Result<()> {
    let mint = parse_pubkey("mint address", &args.mint)?;
    let client = setup_client(&nft_setup_rpc_url(args.rpc_url));

    eprintln!(
        "{} {}Looking up metadata",
        style("[1/1]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );

    let pb = spinner_with_style();
    pb.set_message("Connecting...");
    let metadata = get_metadata(&client, &mint)?;
    pb.finish_and_clear();

    let pretty = PrettyMetadata::from(&metadata);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pretty)?);
        return Ok(());
    }

    println!(
        "\n{}{} {}",
        PAPER_EMOJI,
        style("Metadata:").dim(),
        find_metadata_pda(&mint)
    );
    println!(" {}", style(":").dim());
    print_with_style("", "mint", pretty.mint.clone());
    print_with_style("", "update authority", pretty.update_authority.clone());
    print_with_style("", "name", pretty.name.clone());
    print_with_style("", "symbol", pretty.symbol.clone());
    print_with_style("", "uri", pretty.uri.clone());
    print_with_style(
        "",
        "seller fee basis points",
        format!(
            "{}% ({})",
            pretty.seller_fee_basis_points as f64 / 100.0,
            pretty.seller_fee_basis_points
        ),
    );
    print_with_style(
        "",
        "primary sale happened",
        pretty.primary_sale_happened.to_string(),
    );
    print_with_style("", "is mutable", pretty.is_mutable.to_string());

    match pretty.collection {
        Some(ref collection) => print_with_style(
            "",
            "collection",
            format!("{} (verified: {})", collection.key, collection.verified),
        ),
        None => print_with_style("", "collection", style("none").dim().to_string()),
    }

    print_with_style("", "creators", String::new());
    for (index, creator) in pretty.creators.iter().enumerate() {
        print_with_style(
            "    ",
            &(index + 1).to_string(),
            format!(
                "{} ({}%, verified: {})",
                creator.address, creator.share, creator.verified
            ),
        );
    }

    Ok(())
}
