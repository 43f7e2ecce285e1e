//! Entrypoint for the `poolguard` binary.
//!
//! Answers admission requests for address pools on the command line. The exit
//! status is non-zero if any pool is rejected.

use std::path::Path;

use args::{read_candidate, Args, Command};
use clap::Parser;
use poolguard::{
    logging::enable_logger,
    pool::AddressPool,
    validation::{PoolValidator, Verdict},
};

mod args;

/// Read the candidate pool, or exit if it can't be loaded
fn candidate_or_exit(path: &Path) -> AddressPool {
    match read_candidate(path) {
        Ok(pool) => pool,
        Err(error) => {
            log::error!("{}", error);
            std::process::exit(1);
        }
    }
}

pub fn main() {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    enable_logger(args.verbose);

    // Collect a verdict for every pool the command touches
    let verdicts = match &args.command {
        Command::Create { store, candidate } => {
            let pool = candidate_or_exit(candidate);
            let result = PoolValidator::new(store.source()).validate_create(&pool);
            vec![Verdict::new(&pool.name, &result)]
        }
        Command::Update { store, candidate } => {
            let pool = candidate_or_exit(candidate);
            let result = PoolValidator::new(store.source()).validate_update(&pool);
            vec![Verdict::new(&pool.name, &result)]
        }
        Command::Delete { candidate } => {
            // Deletions never consult the store
            let pool = candidate_or_exit(candidate);
            let result = PoolValidator::new(Vec::<AddressPool>::new()).validate_delete(&pool);
            vec![Verdict::new(&pool.name, &result)]
        }
        Command::Audit { store } => match PoolValidator::new(store.source()).audit() {
            Ok(results) => results
                .iter()
                .map(|(name, result)| Verdict::new(name, result))
                .collect(),
            Err(error) => {
                log::error!("{}", error);
                std::process::exit(1);
            }
        },
    };

    // Report
    for verdict in &verdicts {
        if args.json {
            match serde_json::to_string(verdict) {
                Ok(line) => println!("{line}"),
                Err(error) => log::error!("Failed to encode verdict: {}", error),
            }
        } else if let Some(message) = &verdict.message {
            log::error!("Rejected AddressPool {}: {}", verdict.name, message);
        } else {
            log::info!("Accepted AddressPool {}", verdict.name);
        }
    }

    if verdicts.iter().any(|verdict| !verdict.allowed) {
        std::process::exit(1);
    }
}
