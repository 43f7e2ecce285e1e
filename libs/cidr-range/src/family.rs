use std::fmt;

use ipnet::IpNet;

/// The address family of a CIDR block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Get the family a block belongs to
    #[must_use]
    pub fn of(net: &IpNet) -> Self {
        match net {
            IpNet::V4(_) => Self::V4,
            IpNet::V6(_) => Self::V6,
        }
    }

    /// Get the family a block's network address belongs to, counting
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) as IPv4
    #[must_use]
    pub fn of_unmapped(net: &IpNet) -> Self {
        match net {
            IpNet::V6(net) if net.network().to_ipv4_mapped().is_none() => Self::V6,
            _ => Self::V4,
        }
    }

    /// The widest prefix length (bit width of an address) in this family
    #[must_use]
    pub fn max_prefix_len(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of() {
        assert_eq!(
            AddressFamily::of(&"10.0.0.0/8".parse().unwrap()),
            AddressFamily::V4
        );
        assert_eq!(
            AddressFamily::of(&"2001:db8::/32".parse().unwrap()),
            AddressFamily::V6
        );
    }

    #[test]
    fn test_family_of_mapped_block() {
        let mapped = "::ffff:10.0.0.0/104".parse().unwrap();
        assert_eq!(AddressFamily::of(&mapped), AddressFamily::V6);
        assert_eq!(AddressFamily::of_unmapped(&mapped), AddressFamily::V4);
        assert_eq!(
            AddressFamily::of_unmapped(&"10.0.0.0/8".parse().unwrap()),
            AddressFamily::V4
        );
        assert_eq!(
            AddressFamily::of_unmapped(&"2001:db8::/32".parse().unwrap()),
            AddressFamily::V6
        );
        assert_eq!(
            AddressFamily::of_unmapped(&"::ffff:0:0/80".parse().unwrap()),
            AddressFamily::V6
        );
    }

    #[test]
    fn test_max_prefix_len() {
        assert_eq!(AddressFamily::V4.max_prefix_len(), 32);
        assert_eq!(AddressFamily::V6.max_prefix_len(), 128);
    }
}
