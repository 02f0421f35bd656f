//! Domain models for citylist
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`City`] - A city name paired with its province

mod city;

pub use city::City;
