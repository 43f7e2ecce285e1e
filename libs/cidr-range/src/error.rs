use std::net::IpAddr;

/// All possible errors thrown while resolving an address specification
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("invalid CIDR {0:?}")]
    InvalidCidr(String),
    #[error("invalid IP range {spec:?}: invalid address {address:?}")]
    InvalidAddress { spec: String, address: String },
    #[error("invalid IP range {0:?}: start and end are different address families")]
    MixedFamilyRange(String),
    #[error("invalid IP range {spec:?}: start IP {start} is after the end IP {end}")]
    ReversedRange {
        spec: String,
        start: IpAddr,
        end: IpAddr,
    },
}

/// Result type for `cidr-range`
pub type Result<T> = std::result::Result<T, Error>;
