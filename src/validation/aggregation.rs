use cidr_range::AddressFamily;

use super::error::{Error, Result};

/// Validates an aggregation length for one address family against a pool's addresses.
///
/// The length must fit the family's bit width, and must not be broader than
/// the least specific block any same-family address specification resolves to.
/// Address specifications of the other family are not constrained. IPv4-mapped
/// IPv6 blocks belong to the IPv4 family for this purpose.
pub fn validate_aggregation_length(
    length: u32,
    family: AddressFamily,
    pool_addresses: &[String],
) -> Result<()> {
    log::trace!("Validating {} aggregation length {}", family, length);

    if length > u32::from(family.max_prefix_len()) {
        return Err(Error::AggregationLengthOutOfRange { length, family });
    }

    for spec in pool_addresses {
        let cidrs = cidr_range::resolve(spec).map_err(|source| Error::InvalidAddressSpec {
            spec: spec.clone(),
            source,
        })?;

        // Ranges never mix families, so the first block gives the family of the whole specification.
        // IPv4-mapped IPv6 blocks are treated as IPv4 here
        let Some(first) = cidrs.first() else {
            continue;
        };
        if AddressFamily::of_unmapped(first) != family {
            continue;
        }

        let narrowest = cidrs
            .iter()
            .map(ipnet::IpNet::prefix_len)
            .min()
            .unwrap_or_default();
        if length < u32::from(narrowest) {
            return Err(Error::AggregationTooBroad {
                length,
                narrowest,
                spec: spec.clone(),
            });
        }
    }

    Ok(())
}
