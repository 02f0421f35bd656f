//! Core domain logic for citylist
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (City)
//! - `services/` - The city registry
//! - `error` - Registry failure kinds

pub mod error;
pub mod models;
pub mod services;

pub use error::{CityError, Result};
