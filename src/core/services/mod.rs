//! Business logic services
//!
//! - [`city_list`] - Uniqueness-enforcing, sortable collection of cities

pub mod city_list;

pub use city_list::CityList;
