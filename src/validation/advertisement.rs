use cidr_range::AddressFamily;

use super::{
    aggregation::validate_aggregation_length,
    community::validate_communities,
    error::{Error, Result},
};
use crate::pool::Advertisement;

/// Validates the advertisement directives of a pool.
///
/// Checks stop at the first violation.
pub fn validate_advertisements(
    advertisements: &[Advertisement],
    pool_addresses: &[String],
) -> Result<()> {
    if advertisements.is_empty() {
        return Ok(());
    }
    log::debug!("Validating {} advertisements", advertisements.len());

    for (i, advertisement) in advertisements.iter().enumerate() {
        if advertisements[i + 1..].contains(advertisement) {
            return Err(Error::DuplicateAdvertisement);
        }
    }

    for advertisement in advertisements {
        validate_communities(&advertisement.communities)?;

        if let Some(length) = advertisement.aggregation_length {
            validate_aggregation_length(length, AddressFamily::V4, pool_addresses)?;
        }
        if let Some(length) = advertisement.aggregation_length_v6 {
            validate_aggregation_length(length, AddressFamily::V6, pool_addresses)?;
        }
    }

    Ok(())
}
