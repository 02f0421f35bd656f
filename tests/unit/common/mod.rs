//! Shared test fixtures and helpers

use std::fs;
use std::path::{Path, PathBuf};

use citylist::{City, CityList};
use tempfile::TempDir;

/// The city most tests start from
pub fn mock_city() -> City {
    City::new("Edmonton", "Alberta")
}

/// A list holding only [`mock_city`]
pub fn mock_city_list() -> CityList {
    let mut list = CityList::new();
    list.add(mock_city()).unwrap();
    list
}

/// Build a list from `(city, province)` pairs
pub fn city_list_of(pairs: &[(&str, &str)]) -> CityList {
    CityList::from_cities(pairs.iter().map(|(c, p)| City::new(*c, *p))).unwrap()
}

/// City names in listing order
pub fn names(list: &CityList) -> Vec<String> {
    list.cities().iter().map(|c| c.city_name().to_string()).collect()
}

/// A temporary directory holding a seed file
pub struct SeedDir {
    dir: TempDir,
}

impl SeedDir {
    /// Create a seed file named `cities.toml` with the given contents
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("cities.toml"), content).unwrap();
        Self { dir }
    }

    /// Directory containing the seed file
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Full path of the seed file
    pub fn file(&self) -> PathBuf {
        self.dir.path().join("cities.toml")
    }
}
