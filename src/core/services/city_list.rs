//! City list - a uniqueness-enforcing collection of cities
//!
//! Cities are kept in insertion order internally. Listing returns a sorted
//! snapshot, so callers can never mutate the backing store and bypass the
//! duplicate check.

use log::debug;

use crate::core::error::{CityError, Result};
use crate::core::models::City;

/// A collection of unique cities
///
/// Two cities are duplicates when both name and province match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityList {
    cities: Vec<City>,
}

impl CityList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { cities: Vec::new() }
    }

    /// Build a list from cities, in order
    ///
    /// Fails on the first city that duplicates an earlier one.
    pub fn from_cities(cities: impl IntoIterator<Item = City>) -> Result<Self> {
        let mut list = Self::new();
        for city in cities {
            list.add(city)?;
        }
        Ok(list)
    }

    /// Add a city
    ///
    /// Returns [`CityError::DuplicateCity`] and leaves the list untouched if
    /// an equal city is already present.
    pub fn add(&mut self, city: City) -> Result<()> {
        if self.has_city(&city) {
            debug!("Rejected duplicate city: {city}");
            return Err(CityError::DuplicateCity { city });
        }
        debug!("Added city: {city}");
        self.cities.push(city);
        Ok(())
    }

    /// Delete a city
    ///
    /// Returns [`CityError::CityNotFound`] and leaves the list untouched if
    /// no equal city is present.
    pub fn delete(&mut self, city: &City) -> Result<()> {
        let Some(index) = self.cities.iter().position(|c| c == city) else {
            debug!("Cannot delete missing city: {city}");
            return Err(CityError::CityNotFound { city: city.clone() });
        };
        self.cities.remove(index);
        debug!("Deleted city: {city}");
        Ok(())
    }

    /// Whether an equal city is present
    #[must_use]
    pub fn has_city(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// All cities sorted by city name
    ///
    /// Cities sharing a name keep their insertion order.
    #[must_use]
    pub fn cities(&self) -> Vec<City> {
        let mut sorted = self.cities.clone();
        sorted.sort_by(City::cmp_by_name);
        sorted
    }

    /// Number of cities
    #[must_use]
    pub fn count_cities(&self) -> usize {
        self.cities.len()
    }

    /// Whether the list has no cities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterate in insertion order
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }
}

impl<'a> IntoIterator for &'a CityList {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
