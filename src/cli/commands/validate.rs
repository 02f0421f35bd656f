//! Validate a seed file

use std::path::Path;

use citylist::output::{OutputMode, ValidationResult};
use citylist::seed;

/// Report duplicate entries, exiting non-zero when any exist
pub fn validate(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let seed_file = seed::load_file(file)?;
    let duplicates = seed_file.duplicates();

    let result = ValidationResult {
        valid: duplicates.is_empty(),
        entries: seed_file.cities.len(),
        duplicates,
    };
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }

    Ok(())
}
