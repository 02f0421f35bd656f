//! Command implementations

mod query;
mod validate;

pub use query::{count, has, list};
pub use validate::validate;
