//! The `tiers` command: show the cascade an operator is actually running.

use std::path::Path;

use placelens_core::{default_cascade, load_tiers};

/// Prints the active cascade, either the built-in one or the operator's
/// YAML override.
///
/// # Errors
///
/// Returns an error when `PLACELENS_TIERS_PATH` points at a file that
/// cannot be read or does not validate.
pub(crate) fn run_tiers() -> anyhow::Result<()> {
    let tiers = match std::env::var("PLACELENS_TIERS_PATH") {
        Ok(path) => {
            println!("search cascade from {path}, tried top to bottom:");
            load_tiers(Path::new(&path))?.tiers
        }
        Err(_) => {
            println!("built-in search cascade, tried top to bottom:");
            default_cascade()
        }
    };

    for (index, tier) in tiers.iter().enumerate() {
        match tier.radius_meters {
            Some(radius) => println!("  {}. {} within {radius} m", index + 1, tier.strategy),
            None => println!("  {}. {} without a radius bias", index + 1, tier.strategy),
        }
    }
    Ok(())
}
