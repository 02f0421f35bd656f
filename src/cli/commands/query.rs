//! Read-only queries against the registry - list, count, has

use std::path::Path;

use anyhow::Context;
use log::info;

use citylist::core::models::City;
use citylist::core::services::CityList;
use citylist::output::{CityListResult, CountResult, LookupResult, OutputMode};
use citylist::seed;

/// List cities sorted by name
pub fn list(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let registry = load_registry(file)?;
    let result = CityListResult {
        count: registry.count_cities(),
        cities: registry.cities(),
    };
    result.render(mode);
    Ok(())
}

/// Print the number of cities
pub fn count(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let registry = load_registry(file)?;
    CountResult {
        count: registry.count_cities(),
    }
    .render(mode);
    Ok(())
}

/// Report whether a city is registered
pub fn has(file: &Path, city: &str, province: &str, mode: OutputMode) -> anyhow::Result<()> {
    let registry = load_registry(file)?;
    let city = City::new(city, province);
    let present = registry.has_city(&city);
    LookupResult { city, present }.render(mode);
    Ok(())
}

fn load_registry(file: &Path) -> anyhow::Result<CityList> {
    let registry = seed::load_file(file)?.into_city_list().with_context(|| {
        format!("{} has duplicate entries; run 'citylist validate'", file.display())
    })?;
    info!("Loaded {} cities from {}", registry.count_cities(), file.display());
    Ok(registry)
}
