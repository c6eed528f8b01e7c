//! Client crate for the place web service: nearby search, text search,
//! and place details, normalized into `placelens_core` domain types.

pub mod category;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

mod retry;

pub use category::place_type_for_category;
pub use client::PlacesClient;
pub use error::PlacesError;
