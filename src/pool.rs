//! Address pool configuration objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// The protocol used to announce addresses from a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Layer2,
    Bgp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer2 => write!(f, "layer2"),
            Self::Bgp => write!(f, "bgp"),
        }
    }
}

/// A named set of addresses handed out for allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPool {
    /// Unique pool name
    pub name: String,
    /// Announcement protocol
    pub protocol: Protocol,
    /// Address specifications (addresses, CIDRs or `start-end` ranges)
    pub addresses: Vec<String>,
    /// Whether addresses may be assigned automatically. Not used for validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_assign: Option<bool>,
    /// Whether `.0` and `.255` addresses are avoided. Not used for validation
    #[serde(default, rename = "avoidBuggyIPs")]
    pub avoid_buggy_ips: bool,
    /// Route advertisement directives. Only meaningful for BGP pools
    #[serde(default, rename = "bgpAdvertisements", alias = "advertisements")]
    pub advertisements: Vec<Advertisement>,
}

impl AddressPool {
    /// Construct a pool with no advertisements
    #[must_use]
    pub fn new<S: Into<String>>(name: S, protocol: Protocol, addresses: &[&str]) -> Self {
        Self {
            name: name.into(),
            protocol,
            addresses: addresses.iter().map(|addr| (*addr).to_owned()).collect(),
            auto_assign: None,
            avoid_buggy_ips: false,
            advertisements: Vec::new(),
        }
    }

    /// Add an advertisement directive to this pool
    #[must_use]
    pub fn with_advertisement(mut self, advertisement: Advertisement) -> Self {
        self.advertisements.push(advertisement);
        self
    }
}

/// A BGP route advertisement directive.
///
/// Two advertisements are duplicates if every field is equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    /// Prefix length IPv4 addresses are summarized to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_length: Option<u32>,
    /// Prefix length IPv6 addresses are summarized to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_length_v6: Option<u32>,
    /// BGP `LOCAL_PREF` attribute
    #[serde(default)]
    pub local_pref: u32,
    /// Communities in `asn:value` form
    #[serde(default)]
    pub communities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bgp_pool() {
        let pool: AddressPool = serde_json::from_str(
            r#"{
                "name": "public",
                "protocol": "bgp",
                "addresses": ["192.0.2.0/24"],
                "bgpAdvertisements": [
                    {"aggregationLength": 24, "localPref": 100, "communities": ["65000:100"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(pool.protocol, Protocol::Bgp);
        assert_eq!(pool.auto_assign, None);
        assert!(!pool.avoid_buggy_ips);
        assert_eq!(
            pool.advertisements,
            vec![Advertisement {
                aggregation_length: Some(24),
                aggregation_length_v6: None,
                local_pref: 100,
                communities: vec!["65000:100".to_owned()],
            }]
        );
    }

    #[test]
    fn test_decode_defaults_and_alias() {
        let pool: AddressPool = serde_json::from_str(
            r#"{"name": "lan", "protocol": "layer2", "addresses": [], "advertisements": [{}]}"#,
        )
        .unwrap();
        assert_eq!(pool.protocol, Protocol::Layer2);
        assert_eq!(pool.advertisements, vec![Advertisement::default()]);
    }

    #[test]
    fn test_decode_rejects_unknown_protocol() {
        assert!(serde_json::from_str::<AddressPool>(
            r#"{"name": "x", "protocol": "ospf", "addresses": []}"#
        )
        .is_err());
    }

    #[test]
    fn test_decode_rejects_negative_aggregation_length() {
        assert!(serde_json::from_str::<Advertisement>(r#"{"aggregationLength": -1}"#).is_err());
    }

    #[test]
    fn test_local_pref_distinguishes_advertisements() {
        let first = Advertisement {
            local_pref: 100,
            ..Default::default()
        };
        let second = Advertisement {
            local_pref: 200,
            ..Default::default()
        };
        assert_ne!(first, second);
    }
}
