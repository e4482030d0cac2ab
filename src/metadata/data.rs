use std::str::FromStr;

use mpl_token_metadata::state::{
    Collection as MetaplexCollection, Creator as MetaplexCreator, DataV2,
};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::metadata::{errors::MetadataError, parser};

/// Off-chain description of an NFT, as accepted by the mint and update commands.
///
/// See https://docs.metaplex.com/programs/token-metadata/accounts#metadata
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataJson {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub collection: Option<CollectionRef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Creator {
    pub address: String,
    pub share: u8,
}

/// The `verified` flag is accepted for compatibility but never trusted: the
/// operation building the transaction decides it.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CollectionRef {
    pub key: String,
    #[serde(default)]
    pub verified: bool,
}

impl MetadataJson {
    pub fn validate(&self) -> Result<(), MetadataError> {
        parser::check_name(&self.name)?;
        parser::check_symbol(&self.symbol)?;
        parser::check_uri(&self.uri)?;
        parser::check_seller_fee_basis_points(self.seller_fee_basis_points)?;
        parser::check_creators_addresses(&self.creators)?;
        parser::check_creators_shares(&self.creators)?;

        if let Some(collection) = &self.collection {
            parser::check_collection_key(&collection.key)?;
        }

        Ok(())
    }

    pub fn collection_key(&self) -> Result<Option<Pubkey>, MetadataError> {
        self.collection
            .as_ref()
            .map(|c| parser::check_collection_key(&c.key))
            .transpose()
    }

    /// Converts into the on-chain data layout.
    ///
    /// A creator is marked verified only when its address is `verified_creator`,
    /// the one key expected to sign the transaction carrying this data.
    pub fn to_data_v2(
        &self,
        verified_creator: &Pubkey,
        collection_verified: bool,
    ) -> Result<DataV2, MetadataError> {
        self.validate()?;

        let creators = self
            .creators
            .iter()
            .map(|c| c.to_metaplex_format(verified_creator))
            .collect::<Result<Vec<MetaplexCreator>, MetadataError>>()?;

        let collection = self.collection_key()?.map(|key| MetaplexCollection {
            verified: collection_verified,
            key,
        });

        Ok(DataV2 {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            creators: if creators.is_empty() {
                None
            } else {
                Some(creators)
            },
            collection,
            uses: None,
        })
    }
}

impl Creator {
    pub fn to_metaplex_format(
        &self,
        verified_creator: &Pubkey,
    ) -> Result<MetaplexCreator, MetadataError> {
        let address = Pubkey::from_str(&self.address)
            .map_err(|_| MetadataError::InvalidCreatorAddress(self.address.clone()))?;

        Ok(MetaplexCreator {
            address,
            verified: address == *verified_creator,
            share: self.share,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(owner: &Pubkey, other: &Pubkey) -> MetadataJson {
        MetadataJson {
            name: "Garfield".to_string(),
            symbol: "GARF".to_string(),
            uri: "https://garfiel.de/1.json".to_string(),
            seller_fee_basis_points: 500,
            creators: vec![
                Creator {
                    address: owner.to_string(),
                    share: 70,
                },
                Creator {
                    address: other.to_string(),
                    share: 30,
                },
            ],
            collection: None,
        }
    }

    #[test]
    fn parses_camel_case_json() {
        let owner = Pubkey::new_unique();
        let collection = Pubkey::new_unique();
        let raw = format!(
            r#"{{
                "name": "Garfield",
                "symbol": "GARF",
                "uri": "https://garfiel.de/1.json",
                "sellerFeeBasisPoints": 250,
                "creators": [{{ "address": "{}", "share": 100 }}],
                "collection": {{ "key": "{}", "verified": true }}
            }}"#,
            owner, collection
        );

        let metadata: MetadataJson = serde_json::from_str(&raw).unwrap();

        assert_eq!(metadata.seller_fee_basis_points, 250);
        assert_eq!(metadata.creators.len(), 1);
        assert_eq!(metadata.collection_key().unwrap(), Some(collection));
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn missing_creators_and_collection_default() {
        let raw = r#"{ "name": "A", "symbol": "B", "uri": "C", "sellerFeeBasisPoints": 0 }"#;
        let metadata: MetadataJson = serde_json::from_str(raw).unwrap();

        assert!(metadata.creators.is_empty());
        assert!(metadata.collection.is_none());

        let data = metadata.to_data_v2(&Pubkey::new_unique(), false).unwrap();
        assert!(data.creators.is_none());
        assert!(data.collection.is_none());
        assert!(data.uses.is_none());
    }

    #[test]
    fn only_the_signer_creator_is_verified() {
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        let data = sample(&owner, &other).to_data_v2(&owner, false).unwrap();
        let creators = data.creators.unwrap();

        assert_eq!(creators.len(), 2);
        assert!(creators[0].verified);
        assert_eq!(creators[0].address, owner);
        assert!(!creators[1].verified);
        assert_eq!(creators[1].share, 30);
    }

    #[test]
    fn collection_verified_flag_comes_from_caller() {
        let owner = Pubkey::new_unique();
        let collection = Pubkey::new_unique();
        let mut metadata = sample(&owner, &Pubkey::new_unique());
        metadata.collection = Some(CollectionRef {
            key: collection.to_string(),
            verified: true,
        });

        let data = metadata.to_data_v2(&owner, false).unwrap();
        let on_chain = data.collection.unwrap();
        assert_eq!(on_chain.key, collection);
        assert!(!on_chain.verified);

        let data = metadata.to_data_v2(&owner, true).unwrap();
        assert!(data.collection.unwrap().verified);
    }

    #[test]
    fn invalid_metadata_is_rejected_before_conversion() {
        let owner = Pubkey::new_unique();
        let mut metadata = sample(&owner, &Pubkey::new_unique());
        metadata.creators[1].share = 20;

        assert_eq!(
            metadata.to_data_v2(&owner, false).unwrap_err(),
            MetadataError::InvalidCreatorShare
        );

        let mut metadata = sample(&owner, &Pubkey::new_unique());
        metadata.collection = Some(CollectionRef {
            key: "nope".to_string(),
            verified: false,
        });
        assert_eq!(
            metadata.validate(),
            Err(MetadataError::InvalidCollectionKey("nope".to_string()))
        );
    }
}
