//! Command line argument definitions

use std::path::{Path, PathBuf};

use poolguard::{pool::AddressPool, source::JsonFilePoolSource};

#[derive(clap::Parser)]
#[clap(author, version, about="Admission validation for IP address pools", long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// Print each verdict as a line of JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Validate the creation of a new pool
    Create {
        #[command(flatten)]
        store: StoreArgs,

        /// JSON file holding the candidate pool
        candidate: PathBuf,
    },
    /// Validate an update of an existing pool
    Update {
        #[command(flatten)]
        store: StoreArgs,

        /// JSON file holding the new version of the pool
        candidate: PathBuf,
    },
    /// Validate the deletion of a pool. Always allowed
    Delete {
        /// JSON file holding the pool being deleted
        candidate: PathBuf,
    },
    /// Validate every stored pool against the others
    Audit {
        #[command(flatten)]
        store: StoreArgs,
    },
}

/// Where the pools already in the store are read from
#[derive(clap::Args)]
pub struct StoreArgs {
    /// JSON file listing the pools already in the store
    #[clap(short, long = "existing")]
    pub existing_file: PathBuf,
}

impl StoreArgs {
    /// Build the pool source described by these args
    pub fn source(&self) -> JsonFilePoolSource {
        JsonFilePoolSource::new(&self.existing_file)
    }
}

/// Read a candidate pool from a JSON file
pub fn read_candidate(path: &Path) -> Result<AddressPool, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(path).map_err(|error| {
        format!("Failed to open candidate file {}: {}", path.display(), error)
    })?;
    let pool = serde_json::from_reader(std::io::BufReader::new(file)).map_err(|error| {
        format!("Failed to decode candidate file {}: {}", path.display(), error)
    })?;
    Ok(pool)
}
