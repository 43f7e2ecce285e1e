use ipnet::IpNet;

/// Checks if two CIDR blocks share at least one address.
///
/// Blocks of different address families never overlap. Since CIDR blocks are
/// aligned, two blocks either nest or are disjoint, so checking containment in
/// both directions is enough.
#[must_use]
pub fn overlaps(a: &IpNet, b: &IpNet) -> bool {
    match (a, b) {
        (IpNet::V4(a), IpNet::V4(b)) => a.contains(b) || b.contains(a),
        (IpNet::V6(a), IpNet::V6(b)) => a.contains(b) || b.contains(a),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_nested_blocks_overlap() {
        assert!(overlaps(&net("10.0.0.0/24"), &net("10.0.0.128/25")));
        assert!(overlaps(&net("10.0.0.128/25"), &net("10.0.0.0/24")));
    }

    #[test]
    fn test_identical_blocks_overlap() {
        assert!(overlaps(&net("2001:db8::/64"), &net("2001:db8::/64")));
    }

    #[test]
    fn test_adjacent_blocks_do_not_overlap() {
        assert!(!overlaps(&net("10.0.0.0/25"), &net("10.0.0.128/25")));
        assert!(!overlaps(&net("2001:db8::/33"), &net("2001:db8:8000::/33")));
    }

    #[test]
    fn test_mixed_families_never_overlap() {
        assert!(!overlaps(&net("0.0.0.0/0"), &net("::/0")));
        assert!(!overlaps(&net("::ffff:10.0.0.0/104"), &net("10.0.0.0/8")));
    }
}
