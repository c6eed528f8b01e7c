//! The storefront resolution pipeline.
//!
//! One captured photo flows through four phases: location signal
//! extraction, vision classification, a tiered place search that stops
//! at the first tier with any hit, and enrichment of the winner with
//! provider details plus an AI review digest. [`Resolver`] orchestrates
//! the phases; everything upstream of it is swappable through the traits
//! in [`providers`].

pub mod cascade;
pub mod enrich;
pub mod error;
pub mod providers;
pub mod resolver;
pub mod select;

pub use enrich::EnrichedPlace;
pub use error::Unresolved;
pub use resolver::{ResolutionTrace, ResolvedPlace, Resolver};
pub use select::{select_candidates, Selection, MAX_ALTERNATES};
