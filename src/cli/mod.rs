use clap::{AppSettings, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about)]
#[clap(setting(AppSettings::SubcommandRequiredElseHelp))]
pub struct Cli {
    /// Log level: trace, debug, info, warn, error, off
    #[clap(short, long, global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the transactions that mint one NFT
    Mint {
        /// Path to the metadata JSON file
        #[clap(short, long, default_value = "metadata.json")]
        metadata: String,

        /// Address of the new mint account (its keypair must co-sign)
        #[clap(long)]
        mint: String,

        /// NFT owner, defaults to the payer
        #[clap(long)]
        owner: Option<String>,

        /// Maximum number of prints of the master edition
        #[clap(long, default_value = "0")]
        max_supply: u64,

        /// Rent for the mint account in lamports, queried from the cluster if missing
        #[clap(long)]
        rent: Option<u64>,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Build the transaction that updates the metadata of an NFT
    Update {
        /// Path to the metadata JSON file
        #[clap(short, long, default_value = "metadata.json")]
        metadata: String,

        /// Mint address of the NFT
        #[clap(long)]
        mint: String,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Build the transaction that burns an NFT held by the payer
    Burn {
        /// Mint address of the NFT
        #[clap(long)]
        mint: String,

        /// Collection mint, read from the NFT metadata if missing
        #[clap(long)]
        collection_mint: Option<String>,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Build the transaction that verifies an NFT as member of a collection
    VerifyCollection {
        /// Mint address of the NFT
        #[clap(long)]
        mint: String,

        /// Mint address of the collection NFT
        #[clap(long)]
        collection_mint: String,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Show the on-chain metadata of an NFT
    Show {
        /// Mint address of the NFT
        mint: String,

        /// RPC Url
        #[clap(short, long)]
        rpc_url: Option<String>,

        /// Print as JSON
        #[clap(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to the keypair file, uses Sol config or defaults to "~/.config/solana/id.json"
    #[clap(short, long)]
    pub keypair: Option<String>,

    /// Payer address; overrides the keypair, nothing is signed
    #[clap(short, long)]
    pub payer: Option<String>,

    /// RPC Url
    #[clap(short, long)]
    pub rpc_url: Option<String>,

    /// Recent blockhash to use instead of querying the cluster
    #[clap(short, long)]
    pub blockhash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mint_command() {
        let cli = Cli::try_parse_from([
            "nft-txs",
            "mint",
            "--mint",
            "11111111111111111111111111111111",
            "--rent",
            "1461600",
            "-b",
            "EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG",
        ])
        .unwrap();

        match cli.command {
            Commands::Mint {
                metadata,
                max_supply,
                rent,
                common,
                ..
            } => {
                assert_eq!(metadata, "metadata.json");
                assert_eq!(max_supply, 0);
                assert_eq!(rent, Some(1461600));
                assert!(common.blockhash.is_some());
            }
            _ => panic!("expected mint"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["nft-txs"]).is_err());
    }

    #[test]
    fn verify_collection_requires_collection_mint() {
        assert!(Cli::try_parse_from(["nft-txs", "verify-collection", "--mint", "x"]).is_err());
    }
}
