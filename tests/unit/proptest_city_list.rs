//! Property-based tests for the CityList registry
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use citylist::{City, CityList};
use proptest::prelude::*;

fn city_strategy() -> impl Strategy<Value = City> {
    // Small alphabets so that duplicates and shared names actually occur
    ("[A-D][a-c]{0,2}", "[PQ]").prop_map(|(name, province)| City::new(name, province))
}

proptest! {
    /// Listing is always sorted by city name
    #[test]
    fn cities_are_sorted(cities in prop::collection::vec(city_strategy(), 0..30)) {
        let mut list = CityList::new();
        for city in cities {
            let _ = list.add(city);
        }
        let sorted = list.cities();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].city_name() <= pair[1].city_name());
        }
    }

    /// Count equals successful adds minus successful deletes
    #[test]
    fn count_tracks_successful_mutations(
        adds in prop::collection::vec(city_strategy(), 0..30),
        deletes in prop::collection::vec(city_strategy(), 0..30)
    ) {
        let mut list = CityList::new();
        let mut expected = 0usize;
        for city in adds {
            if list.add(city).is_ok() {
                expected += 1;
            }
        }
        for city in &deletes {
            if list.delete(city).is_ok() {
                expected -= 1;
            }
        }
        prop_assert_eq!(list.count_cities(), expected);
    }

    /// No two listed cities are equal
    #[test]
    fn cities_stay_unique(cities in prop::collection::vec(city_strategy(), 0..30)) {
        let mut list = CityList::new();
        for city in cities {
            let _ = list.add(city);
        }
        let listed = list.cities();
        let unique: HashSet<&City> = listed.iter().collect();
        prop_assert_eq!(unique.len(), listed.len());
    }

    /// Equality holds exactly when both fields match
    #[test]
    fn equality_matches_fields(a in city_strategy(), b in city_strategy()) {
        let fields_match = a.city_name() == b.city_name() && a.province_name() == b.province_name();
        prop_assert_eq!(a == b, fields_match);
    }
}
