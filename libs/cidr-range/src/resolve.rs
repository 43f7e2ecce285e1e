use std::net::IpAddr;

use ipnet::{IpNet, Ipv4Net, Ipv4Subnets, Ipv6Net, Ipv6Subnets};

use crate::error::{Error, Result};

/// Resolves an address specification into the minimal ordered set of CIDR blocks covering it.
///
/// The specification may be a single address, a CIDR, or an inclusive `start-end` range.
pub fn resolve(spec: &str) -> Result<Vec<IpNet>> {
    let trimmed = spec.trim();
    log::trace!("Resolving address specification {:?}", trimmed);

    match trimmed.split_once('-') {
        Some((start, end)) => resolve_range(trimmed, start, end),
        None => resolve_single(trimmed).map(|net| vec![net]),
    }
}

/// Parse a CIDR or a bare address (treated as a host block)
fn resolve_single(spec: &str) -> Result<IpNet> {
    if spec.contains('/') {
        return spec
            .parse::<IpNet>()
            .map(|net| net.trunc())
            .map_err(|_| Error::InvalidCidr(spec.to_owned()));
    }

    match spec.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Ok(IpNet::V4(Ipv4Net::from(addr))),
        Ok(IpAddr::V6(addr)) => Ok(IpNet::V6(Ipv6Net::from(addr))),
        Err(_) => Err(Error::InvalidCidr(spec.to_owned())),
    }
}

/// Cover an inclusive address range with the fewest possible CIDR blocks
fn resolve_range(spec: &str, start: &str, end: &str) -> Result<Vec<IpNet>> {
    let parse_bound = |bound: &str| {
        bound
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| Error::InvalidAddress {
                spec: spec.to_owned(),
                address: bound.trim().to_owned(),
            })
    };
    let (start, end) = (parse_bound(start)?, parse_bound(end)?);

    match (start, end) {
        (IpAddr::V4(first), IpAddr::V4(last)) if first <= last => {
            Ok(Ipv4Subnets::new(first, last, 0).map(IpNet::V4).collect())
        }
        (IpAddr::V6(first), IpAddr::V6(last)) if first <= last => {
            Ok(Ipv6Subnets::new(first, last, 0).map(IpNet::V6).collect())
        }
        (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => {
            Err(Error::ReversedRange {
                spec: spec.to_owned(),
                start,
                end,
            })
        }
        _ => Err(Error::MixedFamilyRange(spec.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(specs: &[&str]) -> Vec<IpNet> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_resolve_cidr() {
        assert_eq!(resolve("10.0.0.0/24").unwrap(), nets(&["10.0.0.0/24"]));
        assert_eq!(resolve("2001:db8::/32").unwrap(), nets(&["2001:db8::/32"]));
    }

    #[test]
    fn test_resolve_cidr_clears_host_bits() {
        assert_eq!(resolve("10.0.0.77/24").unwrap(), nets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_resolve_single_address() {
        assert_eq!(resolve("192.0.2.1").unwrap(), nets(&["192.0.2.1/32"]));
        assert_eq!(resolve("2001:db8::1").unwrap(), nets(&["2001:db8::1/128"]));
    }

    #[test]
    fn test_resolve_aligned_range() {
        assert_eq!(
            resolve("192.168.10.0-192.168.10.255").unwrap(),
            nets(&["192.168.10.0/24"])
        );
    }

    #[test]
    fn test_resolve_unaligned_range() {
        assert_eq!(
            resolve("192.168.10.1 - 192.168.10.6").unwrap(),
            nets(&[
                "192.168.10.1/32",
                "192.168.10.2/31",
                "192.168.10.4/31",
                "192.168.10.6/32"
            ])
        );
    }

    #[test]
    fn test_resolve_single_address_range() {
        assert_eq!(resolve("10.0.0.5-10.0.0.5").unwrap(), nets(&["10.0.0.5/32"]));
    }

    #[test]
    fn test_resolve_v6_range() {
        assert_eq!(
            resolve("2001:db8::-2001:db8::ffff").unwrap(),
            nets(&["2001:db8::/112"])
        );
    }

    #[test]
    fn test_resolve_garbage() {
        assert_eq!(resolve(""), Err(Error::InvalidCidr(String::new())));
        assert_eq!(
            resolve("10.0.0.0/33"),
            Err(Error::InvalidCidr("10.0.0.0/33".to_owned()))
        );
        assert_eq!(
            resolve("not-an-address"),
            Err(Error::InvalidAddress {
                spec: "not-an-address".to_owned(),
                address: "not".to_owned()
            })
        );
    }

    #[test]
    fn test_resolve_reversed_range() {
        assert!(matches!(
            resolve("10.0.0.9-10.0.0.1"),
            Err(Error::ReversedRange { .. })
        ));
    }

    #[test]
    fn test_resolve_mixed_family_range() {
        assert_eq!(
            resolve("10.0.0.1-2001:db8::1"),
            Err(Error::MixedFamilyRange("10.0.0.1-2001:db8::1".to_owned()))
        );
    }
}
