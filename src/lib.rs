//! # Poolguard library
//!
//! *Note: There is a fair chance you are looking for `src/poolguard.rs` instead of this file.*

#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod logging;
pub mod pool;
pub mod source;
pub mod validation;
