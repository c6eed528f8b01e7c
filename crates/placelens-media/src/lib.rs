//! Location-signal extraction from captured photo bytes.
//!
//! A photo either carries an embedded GPS fix, or the capturing device
//! reported its own position, or there is no usable location at all. The
//! third case is a value (`None`), not an error: downstream stages decide
//! what an absent signal means.

pub mod gps;
pub mod signal;

pub use gps::{extract_gps_fix, EastWest, GpsFix, NorthSouth};
pub use signal::locate;
