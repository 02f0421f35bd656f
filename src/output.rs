//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::City;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct CityListResult {
    /// Number of cities
    pub count: usize,
    /// Cities sorted by name
    pub cities: Vec<City>,
}

/// Result of a count operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountResult {
    /// Number of cities
    pub count: usize,
}

/// Result of a membership lookup
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// The city that was looked up
    pub city: City,
    /// Whether the city is in the registry
    pub present: bool,
}

/// Result of validating a seed file
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// Whether the seed file has no duplicate entries
    pub valid: bool,
    /// Number of entries in the seed file
    pub entries: usize,
    /// Entries that repeat an earlier one
    pub duplicates: Vec<City>,
}

impl CityListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.cities.is_empty() {
            println!("No cities.");
            return;
        }

        for city in &self.cities {
            println!("  {} ({})", city.city_name().bold(), city.province_name());
        }
        println!("\n{} city(ies)", self.count);
    }
}

impl CountResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.count),
            OutputMode::Json => render_json(self),
        }
    }
}

impl LookupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.present {
                    println!("{} {}", "found:".green(), self.city);
                } else {
                    println!("{} {}", "not found:".yellow(), self.city);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ValidationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} {} entries, no duplicates", "OK:".green(), self.entries);
            return;
        }

        println!("{} {} duplicate entry(ies):", "INVALID:".red(), self.duplicates.len());
        for city in &self.duplicates {
            println!("  {city}");
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
