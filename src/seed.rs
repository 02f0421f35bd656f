//! Seed file loading
//!
//! A seed file is a read-only TOML listing of cities:
//!
//! ```toml
//! [[city]]
//! city = "Edmonton"
//! province = "Alberta"
//! ```
//!
//! The registry itself is in-memory only; nothing is ever written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::core::models::City;
use crate::core::services::CityList;

/// Default seed file name, relative to the working directory
pub const DEFAULT_SEED_FILE: &str = "cities.toml";

/// A parsed seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    /// City entries, in file order
    #[serde(default, rename = "city")]
    pub cities: Vec<City>,
}

impl SeedFile {
    /// Build a registry from the entries, in file order
    ///
    /// Fails with [`CityError::DuplicateCity`](crate::core::CityError) on the
    /// first repeated entry.
    pub fn into_city_list(self) -> crate::core::Result<CityList> {
        CityList::from_cities(self.cities)
    }

    /// Entries that repeat an earlier entry, in file order
    #[must_use]
    pub fn duplicates(&self) -> Vec<City> {
        let mut seen = HashSet::new();
        self.cities
            .iter()
            .filter(|city| !seen.insert(*city))
            .cloned()
            .collect()
    }
}

/// Parse seed file contents
pub fn parse(content: &str) -> anyhow::Result<SeedFile> {
    let file: SeedFile = toml::from_str(content).context("Invalid seed file")?;
    Ok(file)
}

/// Load and parse a seed file from disk
pub fn load_file(path: &Path) -> anyhow::Result<SeedFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let file = parse(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded {} city entries from {}", file.cities.len(), path.display());
    Ok(file)
}
