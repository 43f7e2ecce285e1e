//! Admission validation of address pools
//!
//! A candidate pool is checked against every pool already in the store. Validation
//! never modifies the candidate or the store, and stops at the first violation.

use ipnet::IpNet;
use serde::Serialize;

use crate::{
    pool::{AddressPool, Protocol},
    source::PoolSource,
};

mod advertisement;
mod aggregation;
mod community;
mod error;

pub use advertisement::validate_advertisements;
pub use aggregation::validate_aggregation_length;
pub use community::validate_communities;
pub use error::{CommunityFault, CommunitySection, Error, ErrorKind, Result, SectionFault};

/// Validates a candidate pool against a snapshot of the existing pools.
///
/// When `is_new` is false the candidate is an update, and the stored pool with
/// the same name is its previous version. That pool is skipped entirely.
pub fn validate_pool(candidate: &AddressPool, is_new: bool, existing: &[AddressPool]) -> Result<()> {
    let cidrs = resolve_pool(candidate)?;

    if !candidate.advertisements.is_empty() {
        if candidate.protocol != Protocol::Bgp {
            return Err(Error::ProtocolMismatch {
                pool: candidate.name.clone(),
                protocol: candidate.protocol,
            });
        }
        validate_advertisements(&candidate.advertisements, &candidate.addresses)
            .map_err(|error| error.in_pool(&candidate.name))?;
    }

    for existing_pool in existing {
        if existing_pool.name == candidate.name {
            if is_new {
                return Err(Error::DuplicatePoolName(candidate.name.clone()));
            }
            log::trace!("Skipping previous version of pool {}", candidate.name);
            continue;
        }

        log::trace!(
            "Comparing pool {} against pool {}",
            candidate.name,
            existing_pool.name
        );
        let existing_cidrs = resolve_pool(existing_pool)?;
        for existing_cidr in &existing_cidrs {
            for cidr in &cidrs {
                if cidr_range::overlaps(existing_cidr, cidr) {
                    return Err(Error::OverlappingCidr {
                        cidr: *cidr,
                        pool: candidate.name.clone(),
                        existing_cidr: *existing_cidr,
                        existing_pool: existing_pool.name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Resolve every address specification of a pool into one list of blocks
fn resolve_pool(pool: &AddressPool) -> Result<Vec<IpNet>> {
    let mut cidrs = Vec::new();
    for spec in &pool.addresses {
        let resolved = cidr_range::resolve(spec).map_err(|source| {
            Error::InvalidAddressSpec {
                spec: spec.clone(),
                source,
            }
            .in_pool(&pool.name)
        })?;
        cidrs.extend(resolved);
    }
    Ok(cidrs)
}

/// Entry points for validating changes to pools held in a [`PoolSource`]
#[derive(Debug)]
pub struct PoolValidator<S: PoolSource> {
    source: S,
}

impl<S: PoolSource> PoolValidator<S> {
    /// Construct a new `PoolValidator` reading existing pools from `source`
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Validate the creation of a new pool
    pub fn validate_create(&self, candidate: &AddressPool) -> Result<()> {
        log::info!("validate AddressPool creation: {}", candidate.name);
        validate_pool(candidate, true, &self.existing_pools()?)
    }

    /// Validate an update of the pool with the same name
    pub fn validate_update(&self, candidate: &AddressPool) -> Result<()> {
        log::info!("validate AddressPool update: {}", candidate.name);
        validate_pool(candidate, false, &self.existing_pools()?)
    }

    /// Validate the deletion of a pool. Deletions are always allowed
    pub fn validate_delete(&self, candidate: &AddressPool) -> Result<()> {
        log::info!("validate AddressPool deletion: {}", candidate.name);
        Ok(())
    }

    /// Validate every stored pool as an update against all the others
    pub fn audit(&self) -> Result<Vec<(String, Result<()>)>> {
        let pools = self.existing_pools()?;
        log::info!("Auditing {} AddressPools", pools.len());
        Ok(pools
            .iter()
            .map(|pool| (pool.name.clone(), validate_pool(pool, false, &pools)))
            .collect())
    }

    fn existing_pools(&self) -> Result<Vec<AddressPool>> {
        self.source.list_pools().map_err(Error::StoreUnavailable)
    }
}

/// The answer given to an admission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub name: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Verdict {
    /// Build a verdict for the pool `name` from a validation result
    #[must_use]
    pub fn new(name: &str, result: &Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                name: name.to_owned(),
                allowed: true,
                kind: None,
                message: None,
            },
            Err(error) => Self {
                name: name.to_owned(),
                allowed: false,
                kind: Some(error.kind()),
                message: Some(error.to_string()),
            },
        }
    }
}
