//! citylist - An in-memory registry of city/province pairs
//!
//! This library provides the [`City`](crate::core::models::City) value type and the
//! [`CityList`](crate::core::services::CityList) registry, plus the seed file loader
//! and output types used by the `citylist` binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod output;
pub mod seed;

pub use crate::core::models::City;
pub use crate::core::services::CityList;
pub use crate::core::{CityError, Result};
