//! Generative model integration: storefront classification from a photo
//! and review summarization for a resolved place.

pub mod client;
pub mod error;
mod prompt;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
