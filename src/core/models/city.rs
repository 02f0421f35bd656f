//! City model
//!
//! A city is identified by its name together with the province it belongs to.
//!
//! Equality and hashing use both fields. The natural ordering used for
//! listing uses the city name alone, so two cities can compare `Equal` under
//! [`City::compare_to`] while still being different values. Because Rust's
//! `Ord` must agree with `Eq`, the natural ordering is exposed as a named
//! comparator instead of an `Ord` impl.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A city and the province it is in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Name of the city (e.g., "Edmonton")
    #[serde(rename = "city")]
    city_name: String,

    /// Name of the province (e.g., "Alberta")
    #[serde(rename = "province")]
    province_name: String,
}

impl City {
    /// Create a new city
    ///
    /// No validation is performed; empty names are accepted as-is.
    #[must_use]
    pub fn new(city_name: impl Into<String>, province_name: impl Into<String>) -> Self {
        Self {
            city_name: city_name.into(),
            province_name: province_name.into(),
        }
    }

    /// The city name
    #[must_use]
    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// The province name
    #[must_use]
    pub fn province_name(&self) -> &str {
        &self.province_name
    }

    /// Compare two cities by city name only
    ///
    /// The province is ignored: `Equal` here does not imply `==`.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.city_name.cmp(&other.city_name)
    }

    /// Comparator form of [`City::compare_to`], for use with `sort_by`
    #[must_use]
    pub fn cmp_by_name(a: &Self, b: &Self) -> Ordering {
        a.compare_to(b)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city_name, self.province_name)
    }
}
