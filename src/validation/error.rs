use std::num::ParseIntError;

use cidr_range::AddressFamily;
use ipnet::IpNet;
use serde::Serialize;

use crate::{pool::Protocol, source::StoreError};

/// Reasons a pool configuration is rejected
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bgpadvertisement config not valid for protocol {protocol} in pool {pool}")]
    ProtocolMismatch { pool: String, protocol: Protocol },
    #[error("invalid address specification {spec:?}: {source}")]
    InvalidAddressSpec {
        spec: String,
        #[source]
        source: cidr_range::Error,
    },
    #[error("duplicate definition of pool {0}")]
    DuplicatePoolName(String),
    #[error("CIDR {cidr} in pool {pool} overlaps with already defined CIDR {existing_cidr} in pool {existing_pool}")]
    OverlappingCidr {
        cidr: IpNet,
        pool: String,
        existing_cidr: IpNet,
        existing_pool: String,
    },
    #[error("duplicate definition of bgpadvertisement")]
    DuplicateAdvertisement,
    #[error("duplicate definition of community {0:?}")]
    DuplicateCommunity(String),
    #[error("invalid community string {community:?}: {fault}")]
    MalformedCommunity {
        community: String,
        #[source]
        fault: CommunityFault,
    },
    #[error("invalid aggregation length {length} for {family}")]
    AggregationLengthOutOfRange { length: u32, family: AddressFamily },
    #[error("invalid aggregation length {length}: prefix {narrowest} in this pool is more specific than the aggregation length for addresses {spec}")]
    AggregationTooBroad {
        length: u32,
        narrowest: u8,
        spec: String,
    },
    #[error("failed to get existing address pools: {0}")]
    StoreUnavailable(#[source] StoreError),
    #[error("pool {pool}: {source}")]
    InPool {
        pool: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the name of the pool being validated to this error
    #[must_use]
    pub fn in_pool(self, pool: &str) -> Self {
        Self::InPool {
            pool: pool.to_owned(),
            source: Box::new(self),
        }
    }

    /// Get the underlying kind of this error, ignoring any pool context
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProtocolMismatch { .. } => ErrorKind::ProtocolMismatch,
            Self::InvalidAddressSpec { .. } => ErrorKind::InvalidAddressSpec,
            Self::DuplicatePoolName(_) => ErrorKind::DuplicatePoolName,
            Self::OverlappingCidr { .. } => ErrorKind::OverlappingCidr,
            Self::DuplicateAdvertisement => ErrorKind::DuplicateAdvertisement,
            Self::DuplicateCommunity(_) => ErrorKind::DuplicateCommunity,
            Self::MalformedCommunity { .. } => ErrorKind::MalformedCommunity,
            Self::AggregationLengthOutOfRange { .. } => ErrorKind::AggregationLengthOutOfRange,
            Self::AggregationTooBroad { .. } => ErrorKind::AggregationTooBroad,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            Self::InPool { source, .. } => source.kind(),
        }
    }
}

/// Flat classification of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    ProtocolMismatch,
    InvalidAddressSpec,
    DuplicatePoolName,
    OverlappingCidr,
    DuplicateAdvertisement,
    DuplicateCommunity,
    MalformedCommunity,
    AggregationLengthOutOfRange,
    AggregationTooBroad,
    StoreUnavailable,
}

/// Which half of an `asn:value` community string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunitySection {
    First,
    Second,
}

impl std::fmt::Display for CommunitySection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Why a community string failed to parse
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CommunityFault {
    #[error("expected 2 sections separated by ':', found {0}")]
    SectionCount(usize),
    #[error("invalid {section} section {value:?}: {source}")]
    InvalidSection {
        section: CommunitySection,
        value: String,
        #[source]
        source: SectionFault,
    },
}

/// Why one section of a community string is not a `u16`
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SectionFault {
    #[error("only decimal digits are allowed")]
    NotDigits,
    #[error(transparent)]
    Number(#[from] ParseIntError),
}

/// Result type for pool validation
pub type Result<T> = std::result::Result<T, Error>;
