//! Registry errors
//!
//! The only two ways a registry mutation can fail.

use thiserror::Error;

use super::models::City;

/// Errors raised by [`CityList`](super::services::CityList) mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityError {
    /// An equal city (same name and province) is already present
    #[error("city already exists: {city}")]
    DuplicateCity {
        /// The rejected city
        city: City,
    },

    /// No equal city is present
    #[error("city not found: {city}")]
    CityNotFound {
        /// The city that was looked up
        city: City,
    },
}

/// Result alias for registry operations
pub type Result<T> = std::result::Result<T, CityError>;
