use std::{collections::HashSet, str::FromStr};

use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{
        MAX_CREATOR_LIMIT, MAX_NAME_LENGTH, MAX_SELLER_FEE_BASIS_POINTS, MAX_SYMBOL_LENGTH,
        MAX_URI_LENGTH, TOTAL_CREATOR_SHARES,
    },
    metadata::{errors::MetadataError, Creator},
};

pub fn check_name(name: &str) -> Result<(), MetadataError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(MetadataError::NameTooLong);
    }
    Ok(())
}

pub fn check_symbol(symbol: &str) -> Result<(), MetadataError> {
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(MetadataError::SymbolTooLong);
    }
    Ok(())
}

pub fn check_uri(uri: &str) -> Result<(), MetadataError> {
    if uri.len() > MAX_URI_LENGTH {
        return Err(MetadataError::UriTooLong);
    }
    Ok(())
}

pub fn check_seller_fee_basis_points(seller_fee_basis_points: u16) -> Result<(), MetadataError> {
    if seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
        return Err(MetadataError::InvalidSellerFeeBasisPoints(
            seller_fee_basis_points,
        ));
    }
    Ok(())
}

/// An empty list is allowed; otherwise shares must add up to exactly 100.
pub fn check_creators_shares(creators: &[Creator]) -> Result<(), MetadataError> {
    if creators.is_empty() {
        return Ok(());
    }

    // summed as u16 so that out-of-range shares cannot wrap back to 100
    let shares: u16 = creators.iter().map(|c| c.share as u16).sum();

    if shares != TOTAL_CREATOR_SHARES as u16 {
        return Err(MetadataError::InvalidCreatorShare);
    }
    Ok(())
}

pub fn check_creators_addresses(creators: &[Creator]) -> Result<(), MetadataError> {
    if creators.len() > MAX_CREATOR_LIMIT {
        return Err(MetadataError::TooManyCreators(creators.len()));
    }

    let mut seen = HashSet::new();

    for creator in creators {
        let address = Pubkey::from_str(&creator.address)
            .map_err(|_| MetadataError::InvalidCreatorAddress(creator.address.clone()))?;

        if !seen.insert(address) {
            return Err(MetadataError::DuplicateCreatorAddress(
                creator.address.clone(),
            ));
        }
    }

    Ok(())
}

pub fn check_collection_key(key: &str) -> Result<Pubkey, MetadataError> {
    Pubkey::from_str(key).map_err(|_| MetadataError::InvalidCollectionKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(share: u8) -> Creator {
        Creator {
            address: Pubkey::new_unique().to_string(),
            share,
        }
    }

    #[test]
    fn name_symbol_and_uri_limits() {
        assert!(check_name(&"a".repeat(32)).is_ok());
        assert_eq!(check_name(&"a".repeat(33)), Err(MetadataError::NameTooLong));

        assert!(check_symbol("SYMBOL").is_ok());
        assert_eq!(
            check_symbol("LONGSYMBOL1"),
            Err(MetadataError::SymbolTooLong)
        );

        assert!(check_uri(&"u".repeat(200)).is_ok());
        assert_eq!(check_uri(&"u".repeat(201)), Err(MetadataError::UriTooLong));
    }

    #[test]
    fn seller_fee_basis_points_range() {
        assert!(check_seller_fee_basis_points(0).is_ok());
        assert!(check_seller_fee_basis_points(10000).is_ok());
        assert_eq!(
            check_seller_fee_basis_points(10001),
            Err(MetadataError::InvalidSellerFeeBasisPoints(10001))
        );
    }

    #[test]
    fn creator_shares_must_total_100() {
        assert!(check_creators_shares(&[]).is_ok());
        assert!(check_creators_shares(&[creator(100)]).is_ok());
        assert!(check_creators_shares(&[creator(40), creator(60)]).is_ok());
        assert_eq!(
            check_creators_shares(&[creator(40), creator(50)]),
            Err(MetadataError::InvalidCreatorShare)
        );
        // 200 + 156 would wrap to 100 in a u8
        assert_eq!(
            check_creators_shares(&[creator(200), creator(156)]),
            Err(MetadataError::InvalidCreatorShare)
        );
    }

    #[test]
    fn creator_addresses() {
        let bad = Creator {
            address: "not-a-key".to_string(),
            share: 100,
        };
        assert_eq!(
            check_creators_addresses(&[bad]),
            Err(MetadataError::InvalidCreatorAddress("not-a-key".to_string()))
        );

        let dup = creator(50);
        assert_eq!(
            check_creators_addresses(&[dup.clone(), dup.clone()]),
            Err(MetadataError::DuplicateCreatorAddress(dup.address))
        );

        let many: Vec<Creator> = (0..6).map(|_| creator(10)).collect();
        assert_eq!(
            check_creators_addresses(&many),
            Err(MetadataError::TooManyCreators(6))
        );
    }
}
