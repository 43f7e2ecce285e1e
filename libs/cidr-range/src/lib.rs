#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod error;
mod family;
mod overlap;
mod resolve;

pub use error::{Error, Result};
pub use family::AddressFamily;
pub use overlap::overlaps;
pub use resolve::resolve;
