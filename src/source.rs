//! Sources of the address pools already known to the configuration store

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::pool::AddressPool;

/// Errors thrown while listing existing pools
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can list every address pool currently in the store
pub trait PoolSource {
    /// Take a snapshot of all existing pools
    fn list_pools(&self) -> Result<Vec<AddressPool>, StoreError>;
}

/// A fixed snapshot of pools
impl PoolSource for Vec<AddressPool> {
    fn list_pools(&self) -> Result<Vec<AddressPool>, StoreError> {
        Ok(self.clone())
    }
}

/// Reads pools from a JSON file on every listing
#[derive(Debug, Clone)]
pub struct JsonFilePoolSource {
    path: PathBuf,
}

/// Accepted layouts of the pool file
#[derive(Deserialize)]
#[serde(untagged)]
enum PoolFile {
    Bare(Vec<AddressPool>),
    List { items: Vec<AddressPool> },
}

impl JsonFilePoolSource {
    /// Construct a new `JsonFilePoolSource`
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PoolSource for JsonFilePoolSource {
    fn list_pools(&self) -> Result<Vec<AddressPool>, StoreError> {
        log::debug!("Reading existing pools from {}", self.path.display());

        let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let pools = match serde_json::from_str(&contents).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })? {
            PoolFile::Bare(pools) | PoolFile::List { items: pools } => pools,
        };

        log::trace!("Found {} existing pools", pools.len());
        Ok(pools)
    }
}
