//! Terminal failure reasons for one resolution attempt.

use thiserror::Error;

/// Why a resolution attempt ended without a resolved place.
///
/// Not every variant is a malfunction. `NoCandidatesFound` is the normal
/// "no automatic match" outcome and routes the caller to manual place
/// selection; the retryable variants are upstream failures where running
/// the same photo again can plausibly succeed.
#[derive(Debug, Error)]
pub enum Unresolved {
    /// The photo carries no usable embedded fix and no device position
    /// was supplied. A coordinate is never assumed or fabricated.
    #[error("no location signal: the photo has no GPS metadata and no device position was supplied")]
    NoLocationSignal,

    /// The vision model call failed or returned an unusable answer.
    #[error("storefront classification failed: {message}")]
    ClassificationFailed { message: String },

    /// Every search tier failed with a provider error, so nothing was
    /// actually searched. Distinct from `NoCandidatesFound`, where the
    /// provider answered and the answer was empty.
    #[error("place search failed across all {tiers_tried} tiers: {message}")]
    SearchFailed { tiers_tried: usize, message: String },

    /// Every search tier answered with zero candidates.
    #[error("no candidates found after {tiers_tried} search tiers")]
    NoCandidatesFound { tiers_tried: usize },

    /// The winning candidate's detail record could not be fetched.
    #[error("details fetch failed for {provider_id}: {message}")]
    DetailsFetchFailed {
        provider_id: String,
        message: String,
    },

    /// The caller tore the attempt down before it finished.
    #[error("resolution cancelled")]
    Cancelled,
}

impl Unresolved {
    /// Whether retrying the same photo could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Unresolved::ClassificationFailed { .. }
                | Unresolved::SearchFailed { .. }
                | Unresolved::DetailsFetchFailed { .. }
        )
    }

    /// Whether the caller should offer manual place selection instead of
    /// presenting the outcome as a system malfunction.
    #[must_use]
    pub fn needs_manual_fallback(&self) -> bool {
        matches!(
            self,
            Unresolved::NoLocationSignal | Unresolved::NoCandidatesFound { .. }
        )
    }
}
